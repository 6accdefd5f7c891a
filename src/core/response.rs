//! 核心响应处理模块

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 健康检查响应
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy(timestamp: DateTime<Utc>) -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp,
        }
    }
}
