//! 前端 Web 应用

pub mod handler;
pub mod model;
pub mod service;
pub mod view;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::WEB_REQUEST_TIMEOUT_SECS;
use crate::core::middleware::request_logging_middleware;

pub use model::{ErrorViewModel, HomeViewModel, InstanceInfoViewModel, ProductViewModel};
pub use service::RelayClient;

const WEB_REQUEST_TIMEOUT: Duration = Duration::from_secs(WEB_REQUEST_TIMEOUT_SECS);

#[derive(Clone)]
pub struct WebState {
    pub relay: RelayClient,
}

impl WebState {
    pub fn new(relay: RelayClient) -> Self {
        Self { relay }
    }
}

pub fn web_router(state: WebState) -> Router {
    Router::new()
        .route("/", get(handler::index))
        .route("/home/call-instance-api", post(handler::call_instance_api))
        .route("/home/call-products-api", post(handler::call_products_api))
        .route("/privacy", get(handler::privacy))
        .fallback(handler::not_found)
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(WEB_REQUEST_TIMEOUT))
        .with_state(state)
}
