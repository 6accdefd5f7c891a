//! # shopfront
//!
//! 两层 Web 示例：
//! - 后端 API 服务：内存中的产品目录、实例信息和健康检查
//! - 前端 Web 应用：通过中继客户端调用后端，把结果渲染成页面
//!
//! 分层结构沿用 app / core / infrastructure 的划分。

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use crate::app::{api_router, web_router, ApiState, WebState};
pub use crate::config::AppConfig;
pub use crate::core::error::CoreError;
pub use crate::core::relay::RelayOutcome;
