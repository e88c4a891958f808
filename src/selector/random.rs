//! Random target selection for practice rounds
//!
//! Uses the `rand` crate. Never used to answer "what is today's secret";
//! see [`crate::selector::daily`] for that.

use crate::catalog::{Catalog, Location};
use crate::error::{Error, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Source of random catalog indices
///
/// Implementations must be thread-safe (Send + Sync) to work with the async server.
pub trait TargetPicker: Send + Sync {
    /// Returns the picker name (e.g., "thread", "seeded")
    fn name(&self) -> &'static str;

    /// Pick an index uniformly from `0..len`
    ///
    /// Callers guarantee `len > 0`.
    fn pick_index(&self, len: usize) -> usize;
}

/// Picker backed by the thread-local RNG
#[derive(Debug, Default)]
pub struct ThreadRngPicker;

impl ThreadRngPicker {
    pub fn new() -> Self {
        Self
    }
}

impl TargetPicker for ThreadRngPicker {
    fn name(&self) -> &'static str {
        "thread"
    }

    fn pick_index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Seeded picker for reproducible practice rounds and tests
pub struct SeededPicker {
    rng: Mutex<StdRng>,
}

impl SeededPicker {
    /// Create a new seeded picker
    ///
    /// Using the same seed will produce the same sequence of picks.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl TargetPicker for SeededPicker {
    fn name(&self) -> &'static str {
        "seeded"
    }

    fn pick_index(&self, len: usize) -> usize {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_range(0..len)
    }
}

/// Get a picker, seeded when a seed is given
pub fn get_picker(seed: Option<u64>) -> Box<dyn TargetPicker> {
    match seed {
        Some(seed) => Box::new(SeededPicker::new(seed)),
        None => Box::new(ThreadRngPicker::new()),
    }
}

/// Pick a random location from the catalog
pub fn select_random_target<'a>(
    catalog: &'a Catalog,
    picker: &dyn TargetPicker,
) -> Result<&'a Location> {
    if catalog.is_empty() {
        return Err(Error::EmptyCatalog);
    }

    catalog
        .get(picker.pick_index(catalog.len()))
        .ok_or(Error::EmptyCatalog)
}
