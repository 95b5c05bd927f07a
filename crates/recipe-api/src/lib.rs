//! # Fridge Friend Recipe API
//!
//! HTTP broker that turns a list of ingredients into a recipe using an
//! OpenAI-compatible chat-completion API.
//!
//! ## Features
//!
//! - **Validation**: Ordered request checks and ingredient sanitization before
//!   anything reaches the prompt
//! - **Rate Limiting**: Fixed-window limits per client identifier
//! - **Recipe Extraction**: Tolerates prose and markdown around the model's JSON
//! - **OpenAPI Documentation**: Generated from the route handlers
//! - **Monitoring**: Prometheus metrics and structured tracing

pub mod api;
pub mod config;
pub mod error;
pub mod server;
pub mod upstream;
pub mod validation;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use server::{AppState, Server};

/// Version of the recipe-api crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
