//! API middleware stack

mod rate_limit;

pub use rate_limit::{client_identifier, rate_limit_middleware, RateLimitStore, UNKNOWN_CLIENT};

use crate::server::AppState;
use axum::{http::HeaderValue, Router};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::{DefaultMakeSpan, TraceLayer},
};
use tracing::warn;

/// Apply the shared middleware to a router
pub fn apply_middleware(router: Router<AppState>, state: &AppState) -> Router<AppState> {
    router
        .layer(cors_layer(&state.config.server.cors_origins))
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if origins.is_empty() || origins.iter().any(|origin| origin == "*") {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(allowed))
}
