//! Catalog command handler
//!
//! List or search guessable locations.

use crate::catalog::{Catalog, Location};
use crate::config::Config;
use crate::error::Result;
use clap::Args;

/// Catalog command arguments
#[derive(Args)]
pub struct CatalogArgs {
    /// Partial name to search for
    pub query: Option<String>,

    /// Maximum number of matches to show
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Catalog JSON file (defaults to the built-in countries)
    #[arg(long, short = 'c')]
    pub catalog: Option<String>,
}

/// Run the catalog command
pub fn run(args: CatalogArgs) -> Result<()> {
    let config = Config::load()?;
    let catalog = Catalog::load(args.catalog.as_deref().or(config.catalog_path()))?;

    let shown: Vec<&Location> = match &args.query {
        Some(query) => catalog.suggest(query, args.count.unwrap_or(config.game.suggestions)),
        None => catalog
            .locations()
            .iter()
            .take(args.count.unwrap_or(usize::MAX))
            .collect(),
    };

    if shown.is_empty() {
        println!("No matching locations.");
        return Ok(());
    }

    for location in &shown {
        println!("{}", describe(location));
    }

    if args.query.is_none() {
        println!("\n{} of {} locations", shown.len(), catalog.len());
    }

    Ok(())
}

/// One-line summary of a location
fn describe(location: &Location) -> String {
    let mut line = format!(
        "{:<28} ({:>8.4}, {:>9.4})",
        location.name, location.lat, location.lon
    );
    if !location.locations.is_empty() {
        let labels: Vec<&str> = location.locations.iter().map(|p| p.label.as_str()).collect();
        line.push_str(&format!("  [{}]", labels.join(", ")));
    }
    line
}
