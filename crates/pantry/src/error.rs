//! Error types for the pantry client

use common::FridgeError;
use thiserror::Error;

/// Message shown when the broker gives no usable reason
pub const GENERIC_FAILURE: &str = "Failed to generate recipe";

/// Recipe request failures
#[derive(Debug, Error)]
pub enum ClientError {
    /// The broker answered with a non-success status
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The broker could not be reached
    #[error("Could not reach the recipe service")]
    Network(#[source] reqwest::Error),

    /// A success response that does not hold a recipe
    #[error("Received a malformed recipe")]
    MalformedRecipe(#[source] serde_json::Error),
}

impl FridgeError for ClientError {}

impl ClientError {
    /// HTTP status reported by the broker, if it answered
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Network(_) | ClientError::MalformedRecipe(_) => None,
        }
    }
}

/// Speech recognition failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpeechError {
    /// No speech engine is available
    #[error("Voice input not supported in this browser")]
    Unsupported,

    /// The engine refused to start listening
    #[error("Failed to start listening: {0}")]
    StartFailed(String),

    /// Recognition failed mid-session
    #[error("Speech recognition error: {0}")]
    Recognition(String),
}

impl FridgeError for SpeechError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_displays_broker_message() {
        let err = ClientError::Api {
            status: 429,
            message: "Too many requests. Please try again in a minute.".to_string(),
        };
        assert_eq!(err.to_string(), "Too many requests. Please try again in a minute.");
        assert_eq!(err.status(), Some(429));
    }

    #[test]
    fn test_malformed_recipe() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ClientError::MalformedRecipe(source);
        assert_eq!(err.to_string(), "Received a malformed recipe");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_speech_errors() {
        assert_eq!(
            SpeechError::Unsupported.to_string(),
            "Voice input not supported in this browser"
        );
        assert_eq!(
            SpeechError::Recognition("no-speech".to_string()).to_string(),
            "Speech recognition error: no-speech"
        );
    }
}
