use std::sync::Arc;

use anyhow::Context;

use flavorstock_api::ApiConfig;
use flavorstock_inventory::{FlavorStore, InMemoryFlavorStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ApiConfig::from_env().context("invalid configuration")?;
    flavorstock_observability::init(config.log_format);

    // Process-lifetime state: everything is lost on restart.
    let store: Arc<dyn FlavorStore> = Arc::new(InMemoryFlavorStore::new());
    let app = flavorstock_api::app::build_app(store);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
