//! 前端 Web 应用
//! 调用后端 API 并渲染页面

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use shopfront::app::home::RelayClient;
use shopfront::infrastructure::logger::Logger;
use shopfront::{web_router, AppConfig, WebState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("加载配置失败")?;
    Logger::init(&config.logging).context("初始化日志失败")?;

    let relay = RelayClient::from_config(&config.relay).context("创建 HTTP 客户端失败")?;
    info!(
        backend = %relay.base_url(),
        timeout_secs = config.relay.timeout_secs,
        "中继客户端已就绪"
    );

    let app = web_router(WebState::new(relay));

    let addr = config.web.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("无法绑定到 {}", addr))?;

    info!("🚀 Web 应用运行在 http://{}", addr);
    axum::serve(listener, app).await.context("服务器运行失败")?;
    Ok(())
}
