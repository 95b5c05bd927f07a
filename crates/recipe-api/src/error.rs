//! Error types for the recipe broker

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use common::FridgeError;
use protocol::ErrorBody;
use thiserror::Error;
use tracing::{debug, error, warn};

/// Main error type for the recipe broker
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] common::ConfigurationError),

    /// No upstream credential configured
    #[error("GROQ_API_KEY not configured")]
    MissingApiKey,

    /// Rate limit exceeded
    #[error("Too many requests. Please try again in a minute.")]
    RateLimitExceeded,

    /// Invalid request
    #[error("{message}")]
    InvalidRequest { message: String },

    /// Upstream answered with a non-success status
    #[error("Failed to generate recipe")]
    Upstream { status: u16 },

    /// Upstream answered without message content
    #[error("No recipe generated")]
    NoRecipeGenerated,

    /// Model output could not be turned into a recipe
    #[error("Failed to parse recipe")]
    RecipeParse { details: String },

    /// The upstream call itself failed
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Internal server error
    #[error("Internal server error: {message}")]
    Internal { message: String },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl FridgeError for Error {}

impl Error {
    pub fn invalid(message: impl Into<String>) -> Self {
        Error::InvalidRequest {
            message: message.into(),
        }
    }

    /// Get error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::Config(_) => "RECIPE_API_CONFIG_ERROR",
            Error::MissingApiKey => "RECIPE_API_MISSING_API_KEY",
            Error::RateLimitExceeded => "RECIPE_API_RATE_LIMIT",
            Error::InvalidRequest { .. } => "RECIPE_API_INVALID_REQUEST",
            Error::Upstream { .. } => "RECIPE_API_UPSTREAM_ERROR",
            Error::NoRecipeGenerated => "RECIPE_API_NO_RECIPE",
            Error::RecipeParse { .. } => "RECIPE_API_PARSE_ERROR",
            Error::Network(_) => "RECIPE_API_NETWORK_ERROR",
            Error::Internal { .. } => "RECIPE_API_INTERNAL_ERROR",
        }
    }

    /// Check if error is a client error
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::RateLimitExceeded | Error::InvalidRequest { .. }
        )
    }

    /// HTTP status for this error. Upstream failures mirror the upstream status.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::RateLimitExceeded => StatusCode::TOO_MANY_REQUESTS,
            Error::InvalidRequest { .. } => StatusCode::BAD_REQUEST,
            Error::Upstream { status } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Error::Config(_)
            | Error::MissingApiKey
            | Error::NoRecipeGenerated
            | Error::RecipeParse { .. }
            | Error::Network(_)
            | Error::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message sent to the client. Transport and internal details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            Error::Config(_) | Error::Network(_) | Error::Internal { .. } => {
                "Internal server error".to_string()
            }
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.error_code();

        if self.is_client_error() {
            debug!(code, status = status.as_u16(), "Rejected request: {}", self);
        } else if status.is_server_error() {
            error!(code, status = status.as_u16(), "Request failed: {}", self);
        } else {
            warn!(code, status = status.as_u16(), "Request failed: {}", self);
        }

        (status, Json(ErrorBody::new(self.public_message()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            Error::RateLimitExceeded.error_code(),
            "RECIPE_API_RATE_LIMIT"
        );
        assert_eq!(Error::MissingApiKey.error_code(), "RECIPE_API_MISSING_API_KEY");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(Error::invalid("x").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            Error::RateLimitExceeded.status_code(),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            Error::MissingApiKey.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            Error::Upstream { status: 401 }.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            Error::Upstream { status: 1000 }.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_client_errors() {
        assert!(Error::invalid("No ingredients provided").is_client_error());
        assert!(Error::RateLimitExceeded.is_client_error());
        assert!(!Error::NoRecipeGenerated.is_client_error());
    }

    #[test]
    fn test_public_messages_hide_internals() {
        let err = Error::Internal {
            message: "upstream body was not JSON".to_string(),
        };
        assert_eq!(err.public_message(), "Internal server error");

        let err = Error::RecipeParse {
            details: "expected value at line 1".to_string(),
        };
        assert_eq!(err.public_message(), "Failed to parse recipe");

        assert_eq!(
            Error::invalid("Ingredients must be an array").public_message(),
            "Ingredients must be an array"
        );
    }
}
