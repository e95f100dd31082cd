//! Frontend configuration loaded from TOML.

use crate::games::tictactoe::MoveOrder;
use crate::render::OutputFormat;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration for the text frontend.
///
/// Every field has a default, so an empty file is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Initial order of the move list.
    #[serde(default)]
    order: MoveOrder,

    /// Render format for views.
    #[serde(default)]
    format: OutputFormat,

    /// `EnvFilter` directives used when `RUST_LOG` is unset.
    #[serde(default)]
    log_filter: Option<String>,

    /// Show `(row, col)` of each move in the text move list.
    #[serde(default = "default_show_coordinates")]
    show_coordinates: bool,
}

fn default_show_coordinates() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            order: MoveOrder::default(),
            format: OutputFormat::default(),
            log_filter: None,
            show_coordinates: default_show_coordinates(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(order = %config.order, format = %config.format, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads `path` if given, defaults otherwise.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Overrides the move list order.
    pub fn with_order(mut self, order: MoveOrder) -> Self {
        self.order = order;
        self
    }

    /// Overrides the render format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(*config.show_coordinates());
        assert_eq!(*config.order(), MoveOrder::Ascending);
    }

    #[test]
    fn test_parse_full_config() {
        let config = AppConfig::from_toml(
            r#"
order = "descending"
format = "json"
log_filter = "timetravel_tictactoe=debug"
show_coordinates = false
"#,
        )
        .unwrap();
        assert_eq!(*config.order(), MoveOrder::Descending);
        assert_eq!(*config.format(), OutputFormat::Json);
        assert_eq!(config.log_filter().as_deref(), Some("timetravel_tictactoe=debug"));
        assert!(!*config.show_coordinates());
    }

    #[test]
    fn test_bad_value_is_error() {
        let err = AppConfig::from_toml(r#"order = "sideways""#).unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }
}
