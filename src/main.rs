//! zoomle CLI entry point
//!
//! Daily country-guessing game - CLI + web API

use zoomle::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
