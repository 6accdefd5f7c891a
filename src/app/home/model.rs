//! 前端视图模型
//!
//! 字段全部宽松解码：缺失的字段取默认值，同时接受 camelCase 和 PascalCase 字段名。

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductViewModel {
    #[serde(alias = "Id")]
    pub id: i32,
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(alias = "Description")]
    pub description: String,
    #[serde(alias = "Price", with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InstanceInfoViewModel {
    #[serde(alias = "InstanceId")]
    pub instance_id: Option<String>,
    #[serde(alias = "Hostname")]
    pub hostname: Option<String>,
    #[serde(alias = "StartupTime")]
    pub startup_time: Option<DateTime<Utc>>,
    #[serde(alias = "Uptime")]
    pub uptime: Option<String>,
    #[serde(skip_deserializing)]
    pub error_message: Option<String>,
}

impl InstanceInfoViewModel {
    pub fn with_error(message: impl Into<String>) -> Self {
        Self {
            error_message: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn has_error(&self) -> bool {
        self.error_message.as_deref().is_some_and(|m| !m.is_empty())
    }
}

/// 首页聚合视图模型，实例和产品两个区块互不影响
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomeViewModel {
    pub instance_info: Option<InstanceInfoViewModel>,
    pub products: Option<Vec<ProductViewModel>>,
    pub products_error_message: Option<String>,
}

impl HomeViewModel {
    pub fn has_products_error(&self) -> bool {
        self.products_error_message
            .as_deref()
            .is_some_and(|m| !m.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorViewModel {
    pub request_id: Option<String>,
}

impl ErrorViewModel {
    pub fn show_request_id(&self) -> bool {
        self.request_id.as_deref().is_some_and(|id| !id.is_empty())
    }
}
