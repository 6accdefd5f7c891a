//! 产品处理器

use axum::{
    extract::{Path, State},
    response::Json,
};
use std::sync::Arc;

use super::model::Product;
use crate::app::ApiState;
use crate::core::error::CoreError;

pub async fn list_products(State(state): State<ApiState>) -> Json<Arc<[Product]>> {
    Json(state.catalog.shared())
}

pub async fn get_product(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
) -> Result<Json<Product>, CoreError> {
    let product = state.catalog.get(id)?;
    Ok(Json(product.clone()))
}
