//! Secret target selection
//!
//! Two separate paths pick the location a round is played against:
//! - [`daily`]: a pure function of the calendar date and the catalog
//! - [`random`]: on-demand random picks for practice and development,
//!   only reachable through a [`random::TargetPicker`]
//!
//! The daily path takes no picker, so it cannot reach randomness.

pub mod daily;
pub mod random;

pub use daily::{day_key, select_daily_target, today_utc};
pub use random::{get_picker, select_random_target, SeededPicker, TargetPicker, ThreadRngPicker};
