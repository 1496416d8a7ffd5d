use anyhow::Context;
use dotenvy::dotenv;
use hemogate::config::ServerConfig;
use hemogate::logging::init_tracing;
use hemogate::metrics::{init_metrics, metrics_app};
use hemogate::router::init_router;
use hemogate::state::init_app_state;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing();

    let server_config = ServerConfig::from_env();
    let state = init_app_state();

    if let Some(handle) = init_metrics().context("failed to install metrics recorder")? {
        let metrics_addr = server_config.metrics_addr();
        let listener = tokio::net::TcpListener::bind(&metrics_addr)
            .await
            .with_context(|| format!("failed to bind metrics listener on {metrics_addr}"))?;
        info!(addr = %metrics_addr, "Metrics available at /metrics");
        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, metrics_app(handle)).await {
                error!(error = %e, "Metrics server stopped");
            }
        });
    }

    let app = init_router(state);

    let addr = server_config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(addr = %addr, "🚀 Server running");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
