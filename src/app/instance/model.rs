//! 实例数据模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceInfo {
    pub instance_id: String,
    pub hostname: String,
    pub startup_time: DateTime<Utc>,
    /// `HH:MM:SS`，小时数不按天回绕
    pub uptime: String,
}
