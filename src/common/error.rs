//! Error types for the crate.

use thiserror::Error;

/// Top-level error.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {message}")]
    ParseError { message: String },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

/// Membership-persistence errors.
///
/// A write failure means the assignment is not durable; callers of the
/// assignment operations receive it and decide how to report it.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read membership data at '{path}': {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to persist membership record '{key}': {source}")]
    WriteFailed {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed membership data at '{path}': {message}")]
    Corrupt { path: String, message: String },
}

/// Result type alias using ChatError.
pub type Result<T> = std::result::Result<T, ChatError>;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for membership-store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;
