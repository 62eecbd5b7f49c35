//! Error types for the contact form.
//!
//! Field-level input problems live in [`crate::domain::ValidationError`];
//! this module holds the crate-level errors built with `thiserror`.

use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Individually valid settings that contradict each other
    #[error("Configuration error: {0}")]
    Inconsistent(String),
}

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
