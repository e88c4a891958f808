//! Centralized constants for the zoomle crate
//!
//! This module consolidates constants that are used across multiple modules
//! to avoid duplication and ensure consistency.

/// Geographic constants
pub mod geo {
    /// Mean Earth radius in kilometers
    pub const EARTH_RADIUS_KM: f64 = 6_371.0;

    /// Width of one compass octant in degrees
    pub const OCTANT_DEGREES: f64 = 45.0;
}

/// Round rules
pub mod game {
    /// Maximum number of guesses in a round
    pub const MAX_ATTEMPTS: usize = 6;

    /// Default number of suggestions returned for partial input
    pub const SUGGESTION_LIMIT: usize = 10;

    /// Most games the server keeps in memory at once
    pub const MAX_LIVE_GAMES: usize = 1_024;
}

/// Map presentation
pub mod map {
    /// Zoom level before any guess is made
    pub const INITIAL_ZOOM: u8 = 8;

    /// Zoom never drops below this level
    pub const MIN_ZOOM: u8 = 2;
}
