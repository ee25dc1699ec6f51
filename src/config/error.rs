//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Duration '{0}' must be greater than zero")]
    ZeroDuration(&'static str),

    #[error("Reveal delay must be at least one highlight interval")]
    RevealBeforeFirstHighlight,

    #[error("Storage key must be a non-empty token of letters, digits, '-' or '_'")]
    InvalidStorageKey,

    #[error("Invalid log filter: {0}")]
    InvalidLogLevel(String),
}
