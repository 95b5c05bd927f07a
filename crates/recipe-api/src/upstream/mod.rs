//! Client for the upstream chat-completion API

pub mod extract;
pub mod prompt;

pub use extract::{json_span, parse_recipe};
pub use prompt::build_prompt;

use crate::config::UpstreamConfig;
use crate::error::{Error, Result};
use metrics::histogram;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ResponseMessage>,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// HTTP client for an OpenAI-compatible completion endpoint
#[derive(Clone)]
pub struct CompletionClient {
    http: reqwest::Client,
    config: UpstreamConfig,
    log_bodies: bool,
}

impl CompletionClient {
    /// Create a client. `log_bodies` enables logging of upstream error bodies.
    pub fn new(config: UpstreamConfig, timeout: Option<Duration>, log_bodies: bool) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self {
            http,
            config,
            log_bodies,
        })
    }

    pub fn config(&self) -> &UpstreamConfig {
        &self.config
    }

    /// Send a single-message completion request and return the message content
    pub async fn complete(&self, api_key: &str, prompt: &str) -> Result<String> {
        let request = ChatCompletionRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        let started = Instant::now();
        let response = self
            .http
            .post(self.config.completions_url())
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await;
        histogram!("recipe_api_upstream_duration_seconds").record(started.elapsed().as_secs_f64());
        let response = response?;

        let status = response.status();
        if !status.is_success() {
            if self.log_bodies {
                let body = response.text().await.unwrap_or_default();
                warn!(status = status.as_u16(), body = %body, "Upstream returned an error");
            } else {
                warn!(status = status.as_u16(), "Upstream returned an error");
            }
            return Err(Error::Upstream {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let parsed: ChatCompletionResponse =
            serde_json::from_str(&body).map_err(|e| Error::Internal {
                message: format!("Invalid upstream response: {e}"),
            })?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .filter(|content| !content.is_empty())
            .ok_or(Error::NoRecipeGenerated)?;

        debug!(length = content.len(), "Received completion");
        Ok(content)
    }
}
