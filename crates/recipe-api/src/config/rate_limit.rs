//! Rate limiting configuration

use serde::{Deserialize, Serialize};

/// Fixed-window rate limiting configuration, applied per client identifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Accepted requests per window
    pub requests_per_window: u32,

    /// Window length in seconds
    pub window_secs: u64,

    /// How often expired records are evicted, in seconds
    pub cleanup_interval_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            requests_per_window: 10,
            window_secs: 60,
            cleanup_interval_secs: 300,
        }
    }
}
