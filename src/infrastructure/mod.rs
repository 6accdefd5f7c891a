//! 基础设施层：日志和 HTTP 客户端

pub mod http_client;
pub mod logger;
