pub mod api;
pub mod config;

use anyhow::Result;
use folder_hub_core::Driver;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Serve the HTTP API for `driver` until the process is stopped.
pub async fn serve(addr: &str, driver: Arc<Driver>) -> Result<()> {
    let app = api::router(driver);
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
