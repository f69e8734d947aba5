//! Configuration file handling
//!
//! Settings live in a small JSON document. Every field is optional; missing
//! fields take their defaults and command-line flags override the file.
//!
//! ```json
//! { "length": 64, "format": "text", "keep_going": false }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use pwstretch_core::DEFAULT_LENGTH;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// How results are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Pipeline and output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Stretch length in characters
    pub length: usize,
    /// Output format
    pub format: OutputFormat,
    /// Continue past base passwords that fail instead of aborting the batch
    pub keep_going: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            format: OutputFormat::default(),
            keep_going: false,
        }
    }
}

impl Config {
    /// Parse a config document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Load a config file, falling back to defaults if it does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }
}

/// Get the default config file path
#[cfg(feature = "cli")]
pub fn default_config_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("pwstretch").join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.length, 64);
        assert_eq!(config.format, OutputFormat::Text);
        assert!(!config.keep_going);
    }

    #[test]
    fn test_partial_document() {
        let config = Config::from_json(r#"{ "format": "json" }"#).unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.length, 64);

        let config = Config::from_json(r#"{ "length": 32, "keep_going": true }"#).unwrap();
        assert_eq!(config.length, 32);
        assert!(config.keep_going);
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(Config::from_json("{}").unwrap(), Config::default());
    }

    #[test]
    fn test_rejects_bad_documents() {
        assert!(matches!(
            Config::from_json(r#"{ "length": -1 }"#),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            Config::from_json(r#"{ "format": "yaml" }"#),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            Config::from_json(r#"{ "cost": 14 }"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("pwstretch-missing-config-does-not-exist.json");
        assert_eq!(Config::load_or_default(&path).unwrap(), Config::default());
        assert!(matches!(Config::load(&path), Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_load_file() {
        let path = std::env::temp_dir().join(format!("pwstretch-config-{}.json", std::process::id()));
        fs::write(&path, r#"{ "length": 20 }"#).unwrap();

        let config = Config::load(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.length, 20);
    }
}
