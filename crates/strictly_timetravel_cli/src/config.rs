//! Console configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_timetravel::DisplayOrder;
use tracing::{debug, info, instrument};

/// Settings for the console front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Initial order of the history list.
    #[serde(default)]
    display_order: DisplayOrder,

    /// Print the history list after every command.
    #[serde(default = "default_show_history")]
    show_history: bool,

    /// Log filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_show_history() -> bool {
    true
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl ConsoleConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(display_order = %config.display_order, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Returns a copy with the display order replaced.
    pub fn with_display_order(mut self, display_order: DisplayOrder) -> Self {
        self.display_order = display_order;
        self
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            display_order: DisplayOrder::default(),
            show_history: default_show_history(),
            log_filter: default_log_filter(),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
