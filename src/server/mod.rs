//! HTTP server for zoomle
//!
//! Provides a REST API where the server owns each round.

pub mod routes;
pub mod state;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::Result;
use routes::create_router;
use state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Start the HTTP server on the configured address
///
/// # Arguments
/// * `config` - Server configuration
/// * `catalog` - Guessable locations
///
/// # Returns
/// Never returns unless the server shuts down
pub async fn run(config: Config, catalog: Catalog) -> Result<()> {
    let addr = config.server_addr();
    run_on(&addr, config, catalog).await
}

/// Start the HTTP server with a specific address
///
/// Useful for tests or when you want to override config
pub async fn run_on(addr: &str, config: Config, catalog: Catalog) -> Result<()> {
    let addr: SocketAddr = addr.parse().map_err(|e| {
        crate::error::Error::Server(format!("Invalid server address: {}", e))
    })?;

    info!(locations = catalog.len(), "Loaded catalog");

    let state = Arc::new(AppState::new(config, catalog));
    let app = create_router(state);

    info!("Starting server on {}", addr);

    let listener = TcpListener::bind(addr).await.map_err(|e| {
        crate::error::Error::Server(format!("Failed to bind to {}: {}", addr, e))
    })?;

    axum::serve(listener, app).await.map_err(|e| {
        crate::error::Error::Server(format!("Server error: {}", e))
    })?;

    Ok(())
}
