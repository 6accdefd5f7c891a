//! 核心层：错误类型、中继结果、时钟和中间件

pub mod clock;
pub mod error;
pub mod middleware;
pub mod relay;
pub mod response;
