//! Display configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading a display configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The configuration was not valid JSON for this schema
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configuration parsed but its values are unusable
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// How operands are rendered for display.
///
/// Defaults match en-US: `1,234.5`.
///
/// # Example
///
/// ```rust
/// use keycalc::display::DisplayConfig;
///
/// let config = DisplayConfig::from_json_str(r#"{ "grouping_separator": "." , "decimal_point": "," }"#).unwrap();
/// assert_eq!(config.group_size, 3);
/// assert_eq!(config.decimal_point, ',');
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Inserted between digit groups of the integer part
    pub grouping_separator: char,

    /// Digits per group
    pub group_size: usize,

    /// Shown in place of the operand's `.`
    pub decimal_point: char,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            grouping_separator: ',',
            group_size: 3,
            decimal_point: '.',
        }
    }
}

impl DisplayConfig {
    /// Parse and validate a JSON configuration. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: DisplayConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.group_size == 0 {
            return Err(ConfigError::Invalid("group_size must be at least 1".to_string()));
        }
        if self.grouping_separator == self.decimal_point {
            return Err(ConfigError::Invalid(format!(
                "grouping_separator and decimal_point are both '{}'",
                self.decimal_point
            )));
        }
        if self.grouping_separator.is_ascii_digit() || self.decimal_point.is_ascii_digit() {
            return Err(ConfigError::Invalid(
                "separators must not be digits".to_string(),
            ));
        }
        Ok(())
    }
}
