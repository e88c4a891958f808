//! Configuration management
//!
//! Loads and saves configuration from XDG-compliant paths.
//! Config location: ~/.config/zoomle/config.toml

pub mod defaults;

use crate::error::{Error, Result};
use defaults::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Game settings
    #[serde(default)]
    pub game: GameConfig,

    /// Map presentation settings
    #[serde(default)]
    pub map: MapConfig,

    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Default values for CLI output
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Game settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Path to a JSON catalog (empty = built-in countries)
    #[serde(default = "default_catalog")]
    pub catalog: String,

    /// Allow practice games with a random secret
    #[serde(default)]
    pub practice: bool,

    /// Maximum suggestions shown for partial input
    #[serde(default = "default_suggestions")]
    pub suggestions: usize,
}

/// Map presentation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    /// Zoom level before the first guess
    #[serde(default = "default_initial_zoom")]
    pub initial_zoom: u8,

    /// Lowest zoom level reached as guesses accumulate
    #[serde(default = "default_min_zoom")]
    pub min_zoom: u8,
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Default values for CLI output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Default output format
    #[serde(default = "default_format")]
    pub format: String,
}

// Default value functions for serde
fn default_catalog() -> String {
    DEFAULT_CATALOG.to_string()
}
fn default_suggestions() -> usize {
    DEFAULT_SUGGESTIONS
}
fn default_initial_zoom() -> u8 {
    DEFAULT_INITIAL_ZOOM
}
fn default_min_zoom() -> u8 {
    DEFAULT_MIN_ZOOM
}
fn default_host() -> String {
    DEFAULT_HOST.to_string()
}
fn default_port() -> u16 {
    DEFAULT_PORT
}
fn default_format() -> String {
    DEFAULT_FORMAT.to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            catalog: default_catalog(),
            practice: false,
            suggestions: default_suggestions(),
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            initial_zoom: default_initial_zoom(),
            min_zoom: default_min_zoom(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_DIR_NAME))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default path
    ///
    /// Creates default config if file doesn't exist
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = fs::read_to_string(&path).map_err(|e| {
                Error::Config(format!("Failed to read config file: {}", e))
            })?;

            toml::from_str(&content).map_err(|e| {
                Error::Config(format!("Failed to parse config file: {}", e))
            })
        } else {
            let config = Config::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            Error::Config(format!("Failed to serialize config: {}", e))
        })?;

        fs::write(&path, content).map_err(|e| {
            Error::Config(format!("Failed to write config file: {}", e))
        })?;

        Ok(())
    }

    /// Get a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns the value as a string, or None if not found
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["game", "catalog"] => Some(self.game.catalog.clone()),
            ["game", "practice"] => Some(self.game.practice.to_string()),
            ["game", "suggestions"] => Some(self.game.suggestions.to_string()),

            ["map", "initial_zoom"] => Some(self.map.initial_zoom.to_string()),
            ["map", "min_zoom"] => Some(self.map.min_zoom.to_string()),

            ["server", "host"] => Some(self.server.host.clone()),
            ["server", "port"] => Some(self.server.port.to_string()),

            ["defaults", "format"] => Some(self.defaults.format.clone()),

            _ => None,
        }
    }

    /// Set a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns error if key is invalid or value type is wrong
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["game", "catalog"] => {
                self.game.catalog = value.to_string();
            }
            ["game", "practice"] => {
                self.game.practice = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid boolean value: {}", value))
                })?;
            }
            ["game", "suggestions"] => {
                self.game.suggestions = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid suggestions value: {}", value))
                })?;
            }

            ["map", "initial_zoom"] => {
                self.map.initial_zoom = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid zoom value: {}", value))
                })?;
            }
            ["map", "min_zoom"] => {
                self.map.min_zoom = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid zoom value: {}", value))
                })?;
            }

            ["server", "host"] => {
                self.server.host = value.to_string();
            }
            ["server", "port"] => {
                self.server.port = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid port value: {}", value))
                })?;
            }

            ["defaults", "format"] => {
                self.defaults.format = value.to_string();
            }

            _ => {
                return Err(Error::Config(format!("Unknown config key: {}", key)));
            }
        }

        Ok(())
    }

    /// List all available config keys
    pub fn available_keys() -> Vec<&'static str> {
        vec![
            "game.catalog",
            "game.practice",
            "game.suggestions",
            "map.initial_zoom",
            "map.min_zoom",
            "server.host",
            "server.port",
            "defaults.format",
        ]
    }

    /// Map zoom level after `guesses` guesses
    ///
    /// Starts at `initial_zoom` and zooms out one level per guess,
    /// stopping at `min_zoom`.
    pub fn map_zoom(&self, guesses: usize) -> u8 {
        let step = u8::try_from(guesses).unwrap_or(u8::MAX);
        self.map
            .initial_zoom
            .saturating_sub(step)
            .max(self.map.min_zoom)
    }

    /// Catalog path override, if configured
    pub fn catalog_path(&self) -> Option<&str> {
        Some(self.game.catalog.trim()).filter(|p| !p.is_empty())
    }

    /// Get server address as "host:port"
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
