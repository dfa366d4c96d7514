//! User settings loaded from an optional TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for the terminal game.
///
/// Every field has a default, so an empty file (or no file) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// File the interactive game writes its logs to.
    log_file: PathBuf,

    /// Default tracing filter; `RUST_LOG` takes precedence.
    log_filter: String,

    /// Show the 1-9 key in empty cells.
    #[getter(skip)]
    show_hints: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from("tictactoe.log"),
            log_filter: "info".to_string(),
            show_hints: true,
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;

        let settings = Self::from_toml(&content)?;
        info!(log_file = %settings.log_file.display(), "Settings loaded");
        Ok(settings)
    }

    /// Parses settings from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))
    }

    /// Loads `path` when given, defaults otherwise.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Whether empty cells show their 1-9 key.
    pub fn show_hints(&self) -> bool {
        self.show_hints
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let settings = Settings::from_toml("").expect("empty settings are valid");
        assert_eq!(settings, Settings::default());
        assert!(settings.show_hints());
    }

    #[test]
    fn test_partial_toml_overrides() {
        let settings = Settings::from_toml("show_hints = false\nlog_filter = \"debug\"")
            .expect("valid settings");
        assert!(!settings.show_hints());
        assert_eq!(settings.log_filter(), "debug");
        assert_eq!(settings.log_file(), &PathBuf::from("tictactoe.log"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = Settings::from_toml("board_size = 4").expect_err("unknown key");
        assert!(err.message.contains("Failed to parse settings"));
    }
}
