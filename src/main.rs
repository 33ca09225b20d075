use anyhow::Context;
use std::net::SocketAddr;
use std::sync::Arc;

use tunnelcheck::config;
use tunnelcheck::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .init();

    let cfg = config::load_config();
    tracing::info!(
        "Config loaded — port {}, submissions {}",
        cfg.port,
        cfg.submissions_path().display()
    );

    let addr = cfg.addr();
    let shared = Arc::new(AppState::new(cfg));
    let app = tunnelcheck::app(shared);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Cannot bind {addr}"))?;

    tracing::info!("🚀 tunnelcheck listening on http://{addr}");
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("server error")?;

    Ok(())
}
