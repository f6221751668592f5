//! Error types for the console

use thiserror::Error;

/// Result type alias for console operations
pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    /// Terminal read/write failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be read or parsed
    #[error("Config error: {0}")]
    Config(String),

    /// Too many invalid answers to one prompt
    #[error("Too many invalid answers: {0}")]
    RetriesExhausted(String),

    /// Input stream ended mid-session
    #[error("Input closed")]
    InputClosed,
}

impl From<toml::de::Error> for CliError {
    fn from(err: toml::de::Error) -> Self {
        CliError::Config(err.to_string())
    }
}
