//! Output formatters
//!
//! Provides trait-based rendering of game snapshots.

pub mod json;
pub mod text;

use crate::error::Result;
use crate::game::GameView;
use crate::geo::CompassDirection;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Get the format name
    fn name(&self) -> &str;

    /// Get the format description
    fn description(&self) -> &str;

    /// Render a game snapshot
    fn format(&self, view: &GameView) -> Result<String>;
}

/// Get a formatter by name
pub fn get_formatter(name: &str) -> Option<Box<dyn OutputFormatter>> {
    match name.to_lowercase().as_str() {
        "json" => Some(Box::new(json::JsonFormatter)),
        "text" => Some(Box::new(text::TextFormatter)),
        _ => None,
    }
}

/// Arrow glyph for a compass octant
pub fn direction_arrow(direction: CompassDirection) -> &'static str {
    match direction {
        CompassDirection::N => "↑",
        CompassDirection::NE => "↗",
        CompassDirection::E => "→",
        CompassDirection::SE => "↘",
        CompassDirection::S => "↓",
        CompassDirection::SW => "↙",
        CompassDirection::W => "←",
        CompassDirection::NW => "↖",
    }
}
