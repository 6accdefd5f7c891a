//! 日志基础设施

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, LoggingSection};

pub struct Logger;

impl Logger {
    /// `RUST_LOG` 优先，其次是配置里的级别
    pub fn init(settings: &LoggingSection) -> anyhow::Result<()> {
        let env_filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&settings.level))
            .unwrap_or_else(|_| EnvFilter::new("info"));

        let registry = tracing_subscriber::registry().with(env_filter);

        match settings.format {
            LogFormat::Json => registry
                .with(tracing_subscriber::fmt::layer().json())
                .try_init()?,
            LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).try_init()?,
        }

        Ok(())
    }
}
