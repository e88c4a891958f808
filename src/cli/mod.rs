//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod catalog;
pub mod config;
pub mod daily;
pub mod play;
pub mod serve;

use crate::error::{Error, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Daily country-guessing game
#[derive(Parser)]
#[command(name = "zoomle")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Play a round in the terminal
    Play(play::PlayArgs),

    /// Show the daily selection for a date
    Daily(daily::DailyArgs),

    /// List or search guessable locations
    Catalog(catalog::CatalogArgs),

    /// Start web server (foreground)
    Serve(serve::ServeArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

/// Run the CLI
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => play::run(args),
        Commands::Daily(args) => daily::run(args),
        Commands::Catalog(args) => catalog::run(args),
        Commands::Serve(args) => serve::run(args).await,
        Commands::Config(args) => config::run(args),
    }
}

/// Initialize logging to stderr
///
/// Level comes from `RUST_LOG`, falling back to `default_level`.
pub fn init_logging(default_level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .try_init();
}

/// Parse a YYYY-MM-DD date argument
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|e| Error::Config(format!("Invalid date '{}': {}", value, e)))
}
