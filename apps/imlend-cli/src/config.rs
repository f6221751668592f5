//! Console configuration
//!
//! Loaded from a TOML file; every field has a default, so a missing file or
//! a partial one is fine:
//!
//! ```toml
//! [input]
//! max_retries = 3
//! date_format = "%Y, %m, %d"
//!
//! [logging]
//! level = "warn"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{CliError, Result};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub input: InputConfig,
    pub logging: LoggingConfig,
}

/// Prompt behavior
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Re-prompts allowed after the first invalid answer
    pub max_retries: u32,
    /// `chrono` format for dates typed at the prompt
    pub date_format: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            date_format: imlend_core::DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl CliConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load from `path`, or from the default location if it exists, or fall
    /// back to defaults.
    ///
    /// An explicitly given path that cannot be read is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_file(path),
            None => match default_config_path() {
                Some(path) if path.exists() => Self::load_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CliError::Config(format!("{}: {e}", path.display())))?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }
}

/// `~/.imlend/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".imlend").join("config.toml"))
}
