//! Daily command handler
//!
//! Shows which day key a date maps to and, on request, its secret.

use crate::catalog::Catalog;
use crate::cli::parse_date;
use crate::config::Config;
use crate::error::Result;
use crate::selector::{day_key, select_daily_target, today_utc};
use clap::Args;

/// Daily command arguments
#[derive(Args)]
pub struct DailyArgs {
    /// Date (YYYY-MM-DD, UTC); defaults to today
    #[arg(long)]
    pub date: Option<String>,

    /// Print the secret location
    #[arg(long)]
    pub reveal: bool,

    /// Catalog JSON file (defaults to the built-in countries)
    #[arg(long, short = 'c')]
    pub catalog: Option<String>,
}

/// Run the daily command
pub fn run(args: DailyArgs) -> Result<()> {
    let config = Config::load()?;
    let catalog = Catalog::load(args.catalog.as_deref().or(config.catalog_path()))?;

    let date = match args.date.as_deref() {
        Some(date) => parse_date(date)?,
        None => today_utc(),
    };

    let secret = select_daily_target(date, &catalog)?;
    let key = day_key(date);

    println!("Date: {} (UTC)", date);
    println!("Day key: {}", key);
    println!(
        "Catalog index: {} of {}",
        key.rem_euclid(catalog.len() as i64),
        catalog.len()
    );

    if args.reveal {
        println!(
            "Secret: {} ({:.4}, {:.4})",
            secret.name, secret.lat, secret.lon
        );
        for point in &secret.locations {
            println!("  {}: ({:.4}, {:.4})", point.label, point.lat, point.lon);
        }
    } else {
        println!("Secret: hidden (use --reveal)");
    }

    Ok(())
}
