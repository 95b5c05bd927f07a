//! HTTP client for the recipe broker

use crate::error::{ClientError, GENERIC_FAILURE};
use crate::session::RecipeGenerator;
use async_trait::async_trait;
use protocol::{ErrorBody, GenerateRecipeRequest, GenerateRecipeResponse, Recipe, GENERATE_RECIPE_PATH};
use tracing::debug;

/// Talks to `POST /api/generate-recipe`
#[derive(Debug, Clone)]
pub struct HttpRecipeClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpRecipeClient {
    /// Create a client for the broker at `base_url`
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), GENERATE_RECIPE_PATH),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RecipeGenerator for HttpRecipeClient {
    async fn generate(&self, ingredients: &[String]) -> Result<Recipe, ClientError> {
        let request = GenerateRecipeRequest::new(ingredients.iter().cloned());

        let response = self
            .http
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(ClientError::Network)?;

        let status = response.status();
        let body = response.bytes().await.map_err(ClientError::Network)?;
        debug!(status = status.as_u16(), bytes = body.len(), "Broker responded");

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&body)
                .ok()
                .map(|body| body.error)
                .filter(|message| !message.is_empty())
                .unwrap_or_else(|| GENERIC_FAILURE.to_string());
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_slice::<GenerateRecipeResponse>(&body)
            .and_then(GenerateRecipeResponse::into_recipe)
            .map_err(ClientError::MalformedRecipe)
    }
}
