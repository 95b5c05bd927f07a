//! Error handling for Fridge Friend
//!
//! Every crate defines its own `thiserror` enum and implements [`FridgeError`]
//! for it, so callers can bound on a single trait. Configuration failures are
//! shared here because both binaries load layered configuration.

use thiserror::Error;

/// Base trait for all Fridge Friend error types.
///
/// Errors must be thread-safe and own their data so they can cross task
/// boundaries and be converted into HTTP responses.
pub trait FridgeError: std::error::Error + Send + Sync + 'static {}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigurationError {
    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    /// Configuration parsing failed
    #[error("Failed to parse configuration: {details}")]
    ParseError { details: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for {key}: {value} ({reason})")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },

    /// Missing required configuration
    #[error("Missing required configuration: {key}")]
    MissingRequired { key: String },
}

impl FridgeError for ConfigurationError {}

impl ConfigurationError {
    /// Shorthand for an [`ConfigurationError::InvalidValue`]
    pub fn invalid(key: &str, value: impl ToString, reason: &str) -> Self {
        Self::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_message() {
        let err = ConfigurationError::invalid("rate_limit.window_secs", 0, "must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid configuration value for rate_limit.window_secs: 0 (must be positive)"
        );
    }

    #[test]
    fn test_errors_are_send_sync() {
        fn assert_fridge_error<E: FridgeError>() {}
        assert_fridge_error::<ConfigurationError>();
    }
}
