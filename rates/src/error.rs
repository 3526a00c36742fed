//! Error types for configuration and rate lookup.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while resolving the effective configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A config file exists but is not valid JSON, or a present field
    /// has the wrong shape.
    #[error("Malformed config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The merged configuration failed startup validation.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Errors raised by rate lookup.
#[derive(Debug, Error)]
pub enum RateError {
    /// No rate configured for the requested pair.
    #[error("No rate configured for {from}->{to}")]
    PairNotFound { from: String, to: String },
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type for rate lookups.
pub type RateResult<T> = Result<T, RateError>;
