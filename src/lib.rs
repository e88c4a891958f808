//! zoomle: daily country-guessing game engine
//!
//! A library and CLI for a daily geography quiz. Each UTC day selects one
//! secret location from a fixed catalog; players get six guesses and see the
//! great-circle distance and compass direction from each guess to the secret.
//!
//! ## Features
//!
//! - Deterministic daily secret (pure function of the date)
//! - Haversine distance and 8-point compass hints
//! - Practice rounds with a random secret, isolated from the daily path
//! - Terminal play + HTTP API
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use zoomle::catalog::{Catalog, Location};
//! use zoomle::round::{evaluate_guess, Round, RoundStatus};
//! use zoomle::selector::select_daily_target;
//!
//! let catalog = Catalog::new(vec![
//!     Location::new("Japan", 36.2048, 138.2529),
//!     Location::new("France", 46.2276, 2.2137),
//! ]).unwrap();
//!
//! let date = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
//! let secret = select_daily_target(date, &catalog).unwrap();
//!
//! let guessed = catalog.resolve("france").unwrap();
//! let round = evaluate_guess(guessed, secret, &Round::new()).unwrap();
//! let guess = round.last().unwrap();
//! println!("{}: {} km {}", guess.name, guess.distance_km, guess.direction);
//! assert_eq!(round.status(), RoundStatus::InProgress);
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod format;
pub mod game;
pub mod geo;
pub mod round;
pub mod selector;
pub mod server;

// Re-export commonly used types
pub use catalog::{Catalog, Location};
pub use config::Config;
pub use error::{Error, Result};
pub use game::{Game, GameMode, GameView};
pub use geo::{CompassDirection, Coordinates};
pub use round::{evaluate_guess, Guess, Round, RoundStatus};
pub use selector::select_daily_target;
