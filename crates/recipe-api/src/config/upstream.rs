//! Upstream chat-completion API configuration

use serde::{Deserialize, Serialize};

/// Default OpenAI-compatible endpoint base
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Default completion model
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// Upstream API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL; `/chat/completions` is appended
    pub base_url: String,

    /// Bearer credential. Also read from `GROQ_API_KEY`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Model identifier
    pub model: String,

    /// Sampling temperature
    pub temperature: f32,

    /// Completion token budget
    pub max_tokens: u32,

    /// Request timeout in seconds; unset leaves the HTTP client default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// Reject model output that does not match the recipe shape
    pub validate_schema: bool,
}

impl UpstreamConfig {
    /// The configured API key, ignoring blank values
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    /// Full chat-completion endpoint URL
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.7,
            max_tokens: 2000,
            timeout_secs: None,
            validate_schema: false,
        }
    }
}
