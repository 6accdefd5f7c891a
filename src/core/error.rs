//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{debug, error};

/// 后端服务的错误类型
///
/// 目录只读，资源不存在属于正常的控制流；页面渲染失败是服务端错误。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("资源不存在: {0}")]
    NotFound(String),

    #[error("页面渲染失败: {0}")]
    Render(String),
}

impl From<askama::Error> for CoreError {
    fn from(err: askama::Error) -> Self {
        CoreError::Render(err.to_string())
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        match self {
            CoreError::NotFound(what) => {
                debug!(resource = %what, "返回 404");
                // 404 不带响应体
                StatusCode::NOT_FOUND.into_response()
            }
            CoreError::Render(reason) => {
                error!(error = %reason, "页面渲染失败");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
