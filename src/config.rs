//! Configuration file support.
//!
//! Settings live in `$XDG_CONFIG_HOME/keypad-calc/config.toml`. A missing
//! file means defaults; every key is optional.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::calculator::{DEFAULT_DIVISION_BY_ZERO_MESSAGE, EngineSettings};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Append the pending operator to the display.
    pub echo_operator: bool,
    /// Show the running expression above the display.
    pub show_trace: bool,
    /// Text shown when dividing by zero.
    pub division_by_zero_message: String,
    /// Copy each result to the clipboard after equals.
    pub copy_on_equals: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            echo_operator: true,
            show_trace: true,
            division_by_zero_message: DEFAULT_DIVISION_BY_ZERO_MESSAGE.to_string(),
            copy_on_equals: false,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl Config {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// tried and defaults are used when nothing is there.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => match default_config_path() {
                Some(path) => (path, false),
                None => return Ok(Self::default()),
            },
        };

        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if !required && err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => return Err(ConfigError::Read { path, source }),
        };

        let config = Self::from_toml_str(&text).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Settings for the calculator engine.
    pub fn engine_settings(&self) -> EngineSettings {
        EngineSettings {
            echo_operator: self.echo_operator,
            division_by_zero_message: self.division_by_zero_message.clone(),
        }
    }
}

/// Default config file location.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("keypad-calc").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = Config::from_toml_str(
            r#"
            echo_operator = false
            division_by_zero_message = "Cannot divide by zero"
            "#,
        )
        .unwrap();

        assert!(!config.echo_operator);
        assert!(config.show_trace);
        assert!(!config.copy_on_equals);
        assert_eq!(config.division_by_zero_message, "Cannot divide by zero");
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(Config::from_toml_str("precision = 4").is_err());
    }

    #[test]
    fn test_engine_settings() {
        let config = Config {
            echo_operator: false,
            division_by_zero_message: "nope".to_string(),
            ..Config::default()
        };
        let settings = config.engine_settings();
        assert!(!settings.echo_operator);
        assert_eq!(settings.division_by_zero_message, "nope");
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let result = Config::load(Some(Path::new("/nonexistent/keypad-calc/config.toml")));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
