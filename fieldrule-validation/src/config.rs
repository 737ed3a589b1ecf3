// Validator configuration

use crate::errors::DEFAULT_SEPARATOR;
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::env;
use thiserror::Error;

/// Environment variable holding the message separator
pub const SEPARATOR_ENV: &str = "FIELDRULE_ERROR_SEPARATOR";

static GLOBAL: Lazy<ValidatorConfig> = Lazy::new(ValidatorConfig::from_env);

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Settings that shape how failures are reported
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Text placed between failure messages in the aggregate error.
    /// An empty separator concatenates them.
    pub separator: String,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl ValidatorConfig {
    /// Create config from environment variables.
    ///
    /// `FIELDRULE_ERROR_SEPARATOR` understands the `\n` and `\t` escapes.
    pub fn from_env() -> Self {
        let separator = env::var(SEPARATOR_ENV)
            .map(|v| unescape(&v))
            .unwrap_or_else(|_| DEFAULT_SEPARATOR.to_string());

        Self { separator }
    }

    /// Parse config from a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Process-wide default, read from the environment on first use
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Set the message separator
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}

fn unescape(raw: &str) -> String {
    raw.replace("\\n", "\n").replace("\\t", "\t")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_separator_is_newline() {
        assert_eq!(ValidatorConfig::default().separator, "\n");
    }

    #[test]
    fn test_from_toml() {
        let config = ValidatorConfig::from_toml_str(r#"separator = "; ""#).unwrap();
        assert_eq!(config.separator, "; ");

        let config = ValidatorConfig::from_toml_str("").unwrap();
        assert_eq!(config, ValidatorConfig::default());
    }

    #[test]
    fn test_from_toml_rejects_wrong_type() {
        let err = ValidatorConfig::from_toml_str("separator = 3").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_unescape() {
        assert_eq!(unescape(r"a\nb\tc"), "a\nb\tc");
        assert_eq!(unescape(" | "), " | ");
    }

    #[test]
    fn test_with_separator() {
        let config = ValidatorConfig::default().with_separator("");
        assert!(config.separator.is_empty());
    }
}
