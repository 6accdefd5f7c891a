//! HTTP 客户端基础设施

use reqwest::Client;
use std::time::Duration;

use crate::config::RelaySection;

/// 中继调用使用的 HTTP 客户端
///
/// 连接池由 reqwest 管理，这里只负责超时等设置。不做重试。
pub struct HttpClientManager {
    client: Client,
}

impl HttpClientManager {
    pub fn new(settings: &RelaySection) -> reqwest::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .connect_timeout(Duration::from_secs(settings.connect_timeout_secs))
            .pool_idle_timeout(Duration::from_secs(90))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }

    pub fn get_client(&self) -> &Client {
        &self.client
    }
}
