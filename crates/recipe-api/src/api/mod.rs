//! API module for the recipe broker

pub mod middleware;
pub mod routes;
pub mod types;

use crate::server::AppState;
use axum::{
    extract::State,
    middleware::from_fn_with_state,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use utoipa::OpenApi;

/// Create all API routes
pub fn routes(state: &AppState) -> Router<AppState> {
    let router = Router::new()
        .route(
            protocol::GENERATE_RECIPE_PATH,
            post(routes::recipes::generate_recipe).route_layer(from_fn_with_state(
                state.clone(),
                middleware::rate_limit_middleware,
            )),
        )
        .route("/api/health", get(routes::health::health_check))
        .merge(docs_routes());

    let router = match state.metrics {
        Some(_) => router.route(&state.config.telemetry.metrics_path, get(render_metrics)),
        None => router,
    };

    middleware::apply_middleware(router, state)
}

/// Create OpenAPI documentation routes
pub fn docs_routes() -> Router<AppState> {
    Router::new().route("/api-docs/openapi.json", get(openapi_json))
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        routes::recipes::generate_recipe,
        routes::health::health_check,
    ),
    components(schemas(
        protocol::Recipe,
        protocol::GenerateRecipeRequest,
        protocol::GenerateRecipeResponse,
        protocol::ErrorBody,
        types::HealthCheckResponse,
    )),
    tags(
        (name = "recipes", description = "Recipe generation"),
        (name = "health", description = "Health and monitoring"),
    ),
    info(
        title = "Fridge Friend Recipe API",
        version = "1.0.0",
        description = "Turns a list of ingredients into a recipe using a chat-completion model",
        license(
            name = "MIT",
        ),
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development"),
    ),
)]
pub struct ApiDoc;

/// Serve OpenAPI JSON
async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

/// Serve Prometheus metrics
async fn render_metrics(State(state): State<AppState>) -> String {
    state
        .metrics
        .as_ref()
        .map(|handle| handle.render())
        .unwrap_or_default()
}
