//! Recipe generation route handler

use crate::{
    error::{Error, Result},
    server::AppState,
    upstream::{build_prompt, parse_recipe},
    validation::{parse_body, validate_request},
};
use axum::{body::Bytes, extract::State, Json};
use metrics::counter;
use protocol::{ErrorBody, GenerateRecipeRequest, GenerateRecipeResponse};
use tracing::{debug, info, warn};

const PREVIEW_CHARS: usize = 200;

/// Generate a recipe from a list of ingredients
///
/// The body is taken raw so malformed JSON gets the same `{ "error" }` shape
/// as every other rejection.
#[utoipa::path(
    post,
    path = "/api/generate-recipe",
    request_body = GenerateRecipeRequest,
    responses(
        (status = 200, description = "Recipe generated", body = GenerateRecipeResponse),
        (status = 400, description = "Invalid ingredient list", body = ErrorBody),
        (status = 429, description = "Rate limit exceeded", body = ErrorBody),
        (status = 500, description = "Configuration, upstream or parse failure", body = ErrorBody),
    ),
    tag = "recipes",
)]
pub async fn generate_recipe(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<GenerateRecipeResponse>> {
    let ingredients = parse_body(&body)
        .and_then(|value| validate_request(&value, &state.config.validation))
        .inspect_err(|_| counter!("recipe_api_validation_failures_total").increment(1))?;

    let upstream = &state.upstream;
    let api_key = upstream.config().api_key().ok_or(Error::MissingApiKey)?;

    debug!(count = ingredients.len(), "Requesting recipe");
    let prompt = build_prompt(&ingredients);

    let content = upstream
        .complete(api_key, &prompt)
        .await
        .inspect_err(|_| counter!("recipe_api_upstream_failures_total").increment(1))?;

    let recipe = parse_recipe(&content, upstream.config().validate_schema).inspect_err(|e| {
        if state.config.server.is_development() {
            let preview: String = content.chars().take(PREVIEW_CHARS).collect();
            warn!(error = %e, preview = %preview, "Model output was not a recipe");
        }
    })?;

    counter!("recipe_api_recipes_generated_total").increment(1);
    info!(count = ingredients.len(), "Recipe generated");

    Ok(Json(GenerateRecipeResponse { recipe }))
}
