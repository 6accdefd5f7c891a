//! 后端 API 服务
//! 提供产品目录、实例信息和健康检查

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use shopfront::infrastructure::logger::Logger;
use shopfront::{api_router, ApiState, AppConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("加载配置失败")?;
    Logger::init(&config.logging).context("初始化日志失败")?;

    // 启动时只生成一次
    let state = ApiState::at_startup();
    info!(
        instance_id = %state.instance.instance_id(),
        hostname = %state.instance.hostname(),
        products = state.catalog.len(),
        "实例已初始化"
    );

    let app = api_router(state, &config.api.path_base);

    let addr = config.api.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("无法绑定到 {}", addr))?;

    info!("🚀 API 服务运行在 http://{}", addr);
    info!("📖 API 端点 (同时挂在 '{}' 下):", config.api.path_base);
    info!("   GET /health          - 健康检查");
    info!("   GET /products        - 产品列表");
    info!("   GET /products/:id    - 单个产品");
    info!("   GET /instance        - 实例信息");
    info!("   GET /openapi/v1.json - OpenAPI 文档");

    axum::serve(listener, app).await.context("服务器运行失败")?;
    Ok(())
}
