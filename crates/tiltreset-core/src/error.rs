//! Core error types for tiltreset-core.
//!
//! Failures are rare in this crate: the streak rule is total and wallet
//! connection failures are swallowed by the store. What remains is
//! configuration I/O, record loading and input validation.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for tiltreset-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// User record loading errors
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Wallet adapter errors
    #[error("Wallet error: {0}")]
    Wallet(#[from] WalletError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Home directory could not be resolved or created
    #[error("Cannot prepare config directory {path}: {source}")]
    DirUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("unknown config key: {0}")]
    UnknownKey(String),
}

/// Errors surfaced while loading the user record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The backing source has no record for this user
    #[error("No user record available")]
    NotFound,

    /// The backing source failed
    #[error("Failed to load user record: {0}")]
    Unavailable(String),
}

/// Errors reported by a wallet adapter during connection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WalletError {
    /// The user or the wallet app refused the connection
    #[error("Connection rejected: {0}")]
    Rejected(String),

    /// The wallet returned an unusable public key
    #[error("Invalid public key: {0}")]
    InvalidKey(#[from] ValidationError),
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Empty value
    #[error("Empty value for '{0}'")]
    Empty(String),

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
