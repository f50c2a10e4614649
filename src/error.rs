//! Error types for Stylati
//!
//! All fallible construction paths (configuration, seed loading) are
//! converted to `AppError`. Domain operations never produce an `AppError`:
//! unmet preconditions are silent no-ops (see crate docs).

use thiserror::Error;

/// Application-wide error type
///
/// This enum represents all possible errors that can occur
/// while building a [`crate::Store`]. Once the store is constructed,
/// nothing in this crate is fatal.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Seed fixture is unreadable or violates a store invariant
    #[error("Seed data error: {0}")]
    Seed(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Seed(err.to_string())
    }
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
