//! Default configuration values
//!
//! Named constants for all tunable parameters

pub use crate::constants::game::SUGGESTION_LIMIT as DEFAULT_SUGGESTIONS;
pub use crate::constants::map::{INITIAL_ZOOM as DEFAULT_INITIAL_ZOOM, MIN_ZOOM as DEFAULT_MIN_ZOOM};

/// Default catalog path (empty means the built-in country list)
pub const DEFAULT_CATALOG: &str = "";

/// Default output format
pub const DEFAULT_FORMAT: &str = "text";

/// Default server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 7878;

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "zoomle";
