//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    #[error("Tracing initialization failed: {0}")]
    TracingInit(String),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Score decimals must be at most {max}, got {actual}")]
    ScoreDecimalsTooLarge { max: usize, actual: usize },

    #[error("Column header '{0}' cannot be empty")]
    EmptyHeader(&'static str),

    #[error("Score and rank headers must differ")]
    DuplicateHeaders,

    #[error("Invalid log filter directive: {0}")]
    InvalidLogLevel(String),
}
