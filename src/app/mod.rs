//! 应用层
//!
//! - catalog / instance / health：后端 API 服务
//! - home：前端 Web 应用，通过中继客户端调用后端

pub mod catalog;
pub mod health;
pub mod home;
pub mod instance;
pub mod openapi;

use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::core::clock::{system_clock, SharedClock};
use crate::core::middleware::request_logging_middleware;
use catalog::CatalogStore;
use instance::InstanceDescriptor;

pub use home::{web_router, WebState};

/// 后端共享状态，启动时构建一次，之后只读
#[derive(Clone)]
pub struct ApiState {
    pub catalog: CatalogStore,
    pub instance: Arc<InstanceDescriptor>,
    pub clock: SharedClock,
}

impl ApiState {
    pub fn new(catalog: CatalogStore, instance: InstanceDescriptor, clock: SharedClock) -> Self {
        Self {
            catalog,
            instance: Arc::new(instance),
            clock,
        }
    }

    /// 使用系统时钟和默认种子数据，在此刻记录启动时间
    pub fn at_startup() -> Self {
        let clock = system_clock();
        let instance = InstanceDescriptor::capture(clock.now());
        Self::new(CatalogStore::seeded(), instance, clock)
    }
}

/// 后端路由表
///
/// `path_base` 非空时，同一组路由同时挂在根路径和 `path_base` 下。
pub fn api_router(state: ApiState, path_base: &str) -> Router {
    let routes: Router<ApiState> = Router::new()
        .route("/health", get(health::health_check))
        .route("/products", get(catalog::handler::list_products))
        .route("/products/:id", get(catalog::handler::get_product))
        .route("/instance", get(instance::handler::get_instance))
        .route("/openapi/v1.json", get(openapi::openapi_document));

    let base = path_base.trim_end_matches('/');
    let router = if base.is_empty() {
        routes
    } else {
        routes.clone().nest(base, routes)
    };

    router
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
