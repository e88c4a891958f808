//! JSON output formatter

use crate::error::Result;
use crate::format::OutputFormatter;
use crate::game::GameView;

/// JSON formatter - outputs the full snapshot as pretty-printed JSON
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Full JSON snapshot"
    }

    fn format(&self, view: &GameView) -> Result<String> {
        Ok(serde_json::to_string_pretty(view)?)
    }
}
