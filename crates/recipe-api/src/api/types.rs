//! API types owned by the broker
//!
//! Request and response bodies for recipe generation live in `protocol` so the
//! client shares them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthCheckResponse {
    /// Service status
    pub status: String,

    /// Service version
    pub version: String,

    /// Current timestamp
    pub timestamp: DateTime<Utc>,
}
