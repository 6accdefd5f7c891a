use std::env;
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use serde::Deserialize;

const CONFIG_PATH_VAR: &str = "SHOPFRONT_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "shopfront.toml";
const ENV_PREFIX: &str = "SHOPFRONT";

/// 前端整个请求的超时（秒），中继调用的超时必须小于它
pub const WEB_REQUEST_TIMEOUT_SECS: u64 = 30;

/// 应用配置，来自配置文件和环境变量
///
/// 环境变量示例：`SHOPFRONT__RELAY__BASE_URL=http://api:5000/api`
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiSection,
    pub web: WebSection,
    pub relay: RelaySection,
    pub logging: LoggingSection,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let config_path =
            env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let mut builder = ::config::Config::builder();

        if Path::new(&config_path).exists() {
            builder = builder.add_source(::config::File::from(PathBuf::from(&config_path)));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder.build()?;
        let config: Self = settings.try_deserialize()?;
        config.validated()
    }

    /// 校验并规范化
    pub fn validated(mut self) -> Result<Self> {
        if self.logging.level.trim().is_empty() {
            self.logging.level = "info".to_string();
        }

        let base = self.api.path_base.trim();
        if !base.is_empty() && !base.starts_with('/') {
            bail!("api.path_base must start with '/': {}", base);
        }
        self.api.path_base = base.trim_end_matches('/').to_string();

        let url = self.relay.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            bail!("relay.base_url must be an absolute http(s) URL: {}", url);
        }
        self.relay.base_url = url.trim_end_matches('/').to_string();

        if self.relay.timeout_secs == 0 {
            bail!("relay.timeout_secs must be greater than zero");
        }
        if self.relay.timeout_secs >= WEB_REQUEST_TIMEOUT_SECS {
            bail!(
                "relay.timeout_secs must be below the {}s web request timeout: {}",
                WEB_REQUEST_TIMEOUT_SECS,
                self.relay.timeout_secs
            );
        }

        Ok(self)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiSection {
    pub host: String,
    pub port: u16,
    pub path_base: String,
}

impl ApiSection {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            path_base: "/api".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WebSection {
    pub host: String,
    pub port: u16,
}

impl WebSection {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for WebSection {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RelaySection {
    pub base_url: String,
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl Default for RelaySection {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            timeout_secs: 10,
            connect_timeout_secs: 5,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    #[default]
    Text,
}
