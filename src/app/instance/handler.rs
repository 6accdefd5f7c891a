//! 实例信息处理器

use axum::{extract::State, response::Json};

use super::model::InstanceInfo;
use crate::app::ApiState;

pub async fn get_instance(State(state): State<ApiState>) -> Json<InstanceInfo> {
    Json(state.instance.snapshot(state.clock.now()))
}
