//! Daily target selection
//!
//! Days are counted in UTC so every player sees the same secret at the same
//! real-world moment.

use crate::catalog::{Catalog, Location};
use crate::error::{Error, Result};
use chrono::{NaiveDate, Utc};

/// The current calendar date in UTC
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// Days elapsed since 1970-01-01 (negative before the epoch)
pub fn day_key(date: NaiveDate) -> i64 {
    date.signed_duration_since(NaiveDate::default()).num_days()
}

/// Select the secret location for a calendar date
///
/// # Arguments
/// * `date` - Calendar day (UTC)
/// * `catalog` - Candidate locations, in fixed order
///
/// # Returns
/// The catalog entry at `day_key(date) mod catalog.len()`
pub fn select_daily_target(date: NaiveDate, catalog: &Catalog) -> Result<&Location> {
    if catalog.is_empty() {
        return Err(Error::EmptyCatalog);
    }

    let index = day_key(date).rem_euclid(catalog.len() as i64) as usize;
    catalog.get(index).ok_or(Error::EmptyCatalog)
}
