//! Serve command handler
//!
//! Starts the HTTP server in foreground mode.

use crate::catalog::Catalog;
use crate::cli::init_logging;
use crate::config::Config;
use crate::error::Result;
use crate::server;
use clap::Args;
use tracing::{info, warn};

/// Serve command arguments
#[derive(Args)]
pub struct ServeArgs {
    /// Host address to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, short = 'p')]
    pub port: Option<u16>,

    /// Catalog JSON file (defaults to the built-in countries)
    #[arg(long, short = 'c')]
    pub catalog: Option<String>,
}

/// Run the serve command
pub async fn run(args: ServeArgs) -> Result<()> {
    init_logging("info");

    // Load and optionally override config
    let mut config = Config::load()?;

    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    let catalog = Catalog::load(args.catalog.as_deref().or(config.catalog_path()))?;
    if catalog.is_empty() {
        // No daily secret can ever be chosen
        return Err(crate::error::Error::EmptyCatalog);
    }
    if config.game.practice {
        warn!("Practice mode is enabled; random games can be created");
    }

    info!(
        "Starting zoomle server v{} on {}",
        env!("CARGO_PKG_VERSION"),
        config.server_addr()
    );

    server::run(config, catalog).await
}
