//! 中继服务：代表用户调用后端 API
//!
//! 每个方法都返回填好的视图模型。成功、HTTP 错误、传输故障三种结果
//! 都在这里收敛，渲染层拿不到任何错误。

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::error::Error as StdError;
use tracing::{debug, error};

use super::model::{HomeViewModel, InstanceInfoViewModel, ProductViewModel};
use crate::config::RelaySection;
use crate::core::relay::RelayOutcome;
use crate::infrastructure::http_client::HttpClientManager;

const INSTANCE_PATH: &str = "/instance";
const PRODUCTS_PATH: &str = "/products";

#[derive(Debug, Clone)]
pub struct RelayClient {
    client: Client,
    base_url: String,
}

impl RelayClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn from_config(settings: &RelaySection) -> reqwest::Result<Self> {
        let manager = HttpClientManager::new(settings)?;
        Ok(Self::new(manager.get_client().clone(), &settings.base_url))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 调用 `GET /instance`
    pub async fn fetch_instance_info(&self) -> InstanceInfoViewModel {
        let outcome = self
            .get_json::<InstanceInfoViewModel>(INSTANCE_PATH)
            .await;
        log_failure("实例", INSTANCE_PATH, &outcome);

        match outcome {
            RelayOutcome::Success(data) => data.unwrap_or_default(),
            failed => InstanceInfoViewModel::with_error(failed.error_message().unwrap_or_default()),
        }
    }

    /// 调用 `GET /products`，错误信息放在 `products_error_message`
    pub async fn fetch_products(&self) -> HomeViewModel {
        let outcome = self
            .get_json::<Vec<ProductViewModel>>(PRODUCTS_PATH)
            .await;
        log_failure("产品", PRODUCTS_PATH, &outcome);

        let products_error_message = outcome.error_message();
        let products = match outcome {
            RelayOutcome::Success(data) => data.unwrap_or_default(),
            _ => Vec::new(),
        };

        HomeViewModel {
            products: Some(products),
            products_error_message,
            ..HomeViewModel::default()
        }
    }

    /// JSON `null` 解码为 `None`
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> RelayOutcome<Option<T>> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "发起中继调用");

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(err) => return RelayOutcome::TransportFault(describe(&err)),
        };

        let status = response.status();
        if !status.is_success() {
            return RelayOutcome::UpstreamError(status);
        }

        match response.json::<Option<T>>().await {
            Ok(data) => RelayOutcome::Success(data),
            Err(err) => RelayOutcome::TransportFault(describe(&err)),
        }
    }
}

fn log_failure<T>(api: &str, path: &str, outcome: &RelayOutcome<T>) {
    match outcome {
        RelayOutcome::Success(_) => {}
        RelayOutcome::UpstreamError(status) => {
            error!(api, path, status = status.as_u16(), "{} API 调用失败", api);
        }
        RelayOutcome::TransportFault(description) => {
            error!(api, path, error = %description, "调用{} API 出错", api);
        }
    }
}

/// 错误及其来源链，例如 `error sending request ...: connection refused`
fn describe(err: &(dyn StdError + 'static)) -> String {
    let mut description = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !description.contains(&text) {
            description.push_str(": ");
            description.push_str(&text);
        }
        source = cause.source();
    }
    description
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct Layer(&'static str, Option<Box<Layer>>);

    impl fmt::Display for Layer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.0)
        }
    }

    impl StdError for Layer {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            self.1.as_deref().map(|l| l as &(dyn StdError + 'static))
        }
    }

    #[test]
    fn describe_joins_the_source_chain() {
        let err = Layer(
            "error sending request",
            Some(Box::new(Layer("connection refused", None))),
        );
        assert_eq!(describe(&err), "error sending request: connection refused");
    }

    #[test]
    fn describe_skips_repeated_causes() {
        let err = Layer("timed out: operation timed out", Some(Box::new(Layer("operation timed out", None))));
        assert_eq!(describe(&err), "timed out: operation timed out");
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let relay = RelayClient::new(Client::new(), "http://localhost:5000/api/");
        assert_eq!(relay.base_url(), "http://localhost:5000/api");
    }
}
