//! 中继调用结果
//!
//! 前端每次调用后端只会得到三种结果之一：成功、后端返回非 2xx、传输层故障。
//! 调用方拿到的永远是一个值，不会有错误穿过中继边界。

use axum::http::StatusCode;

/// 一次中继调用的结果
#[derive(Debug, Clone, PartialEq)]
pub enum RelayOutcome<T> {
    /// 2xx 且响应体成功解码
    Success(T),
    /// 后端返回了非 2xx 状态码
    UpstreamError(StatusCode),
    /// 连接失败、超时或解码失败
    TransportFault(String),
}

impl<T> RelayOutcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, RelayOutcome::Success(_))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> RelayOutcome<U> {
        match self {
            RelayOutcome::Success(data) => RelayOutcome::Success(f(data)),
            RelayOutcome::UpstreamError(status) => RelayOutcome::UpstreamError(status),
            RelayOutcome::TransportFault(description) => RelayOutcome::TransportFault(description),
        }
    }

    /// 面向用户的错误信息，成功时为 `None`
    pub fn error_message(&self) -> Option<String> {
        match self {
            RelayOutcome::Success(_) => None,
            RelayOutcome::UpstreamError(status) => Some(format!("HTTP 错误! 状态码: {}", status)),
            RelayOutcome::TransportFault(description) => {
                Some(format!("调用 API 出错: {}", description))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_error_message_carries_status_code() {
        let outcome: RelayOutcome<()> = RelayOutcome::UpstreamError(StatusCode::SERVICE_UNAVAILABLE);
        let message = outcome.error_message().unwrap();
        assert!(message.contains("503"));
        assert!(message.contains("Service Unavailable"));
    }

    #[test]
    fn transport_fault_message_carries_description() {
        let outcome: RelayOutcome<()> = RelayOutcome::TransportFault("connection refused".into());
        assert_eq!(
            outcome.error_message().as_deref(),
            Some("调用 API 出错: connection refused")
        );
    }

    #[test]
    fn success_has_no_message() {
        let outcome = RelayOutcome::Success(3).map(|n| n * 2);
        assert_eq!(outcome, RelayOutcome::Success(6));
        assert!(outcome.is_success());
        assert_eq!(outcome.error_message(), None);
    }
}
