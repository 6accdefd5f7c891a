//! 首页控制器

use axum::{extract::State, http::StatusCode, response::Html};
use uuid::Uuid;

use super::{
    model::{ErrorViewModel, HomeViewModel},
    view, WebState,
};
use crate::core::error::CoreError;

pub async fn index() -> Result<Html<String>, CoreError> {
    Ok(Html(view::render_index(&HomeViewModel::default())?))
}

pub async fn call_instance_api(State(state): State<WebState>) -> Result<Html<String>, CoreError> {
    let view_model = HomeViewModel {
        instance_info: Some(state.relay.fetch_instance_info().await),
        ..HomeViewModel::default()
    };
    Ok(Html(view::render_index(&view_model)?))
}

pub async fn call_products_api(State(state): State<WebState>) -> Result<Html<String>, CoreError> {
    let view_model = state.relay.fetch_products().await;
    Ok(Html(view::render_index(&view_model)?))
}

pub async fn privacy() -> Result<Html<String>, CoreError> {
    Ok(Html(view::render_privacy()?))
}

pub async fn not_found() -> Result<(StatusCode, Html<String>), CoreError> {
    let view_model = ErrorViewModel {
        request_id: Some(Uuid::new_v4().to_string()),
    };
    Ok((StatusCode::NOT_FOUND, Html(view::render_error(&view_model)?)))
}
