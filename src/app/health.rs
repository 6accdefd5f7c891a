//! 健康检查

use axum::{extract::State, response::Json};

use crate::app::ApiState;
use crate::core::response::HealthResponse;

pub async fn health_check(State(state): State<ApiState>) -> Json<HealthResponse> {
    Json(HealthResponse::healthy(state.clock.now()))
}
