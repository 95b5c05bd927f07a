//! Rate limiting middleware
//!
//! Fixed-window limiter keyed by a best-effort client identifier. State lives
//! in process memory only: every broker instance enforces its own quota, so a
//! deployment running several instances needs a shared external store to
//! enforce a global limit.

use crate::{
    config::Config,
    error::{Error, Result},
    server::AppState,
};
use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use dashmap::{mapref::entry::Entry, DashMap};
use metrics::counter;
use std::{
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::task::JoinHandle;
use tracing::debug;

/// Identifier used when neither forwarding header is present
pub const UNKNOWN_CLIENT: &str = "unknown";

const FORWARDED_FOR: &str = "x-forwarded-for";
const REAL_IP: &str = "x-real-ip";

/// Request count inside one window
#[derive(Debug, Clone, Copy)]
struct WindowRecord {
    count: u32,
    reset_at: Instant,
}

/// In-memory fixed-window rate limit store
pub struct RateLimitStore {
    records: DashMap<String, WindowRecord>,
    max_requests: u32,
    window: Duration,
}

impl RateLimitStore {
    /// Create a store allowing `max_requests` per `window` per client
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            records: DashMap::new(),
            max_requests,
            window,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.rate_limit.requests_per_window, config.rate_limit_window())
    }

    /// Check and record a request from `client`
    pub fn check(&self, client: &str) -> Result<()> {
        self.check_at(client, Instant::now())
    }

    /// Check and record a request from `client` at `now`.
    ///
    /// Rejected requests are not counted.
    pub fn check_at(&self, client: &str, now: Instant) -> Result<()> {
        match self.records.entry(client.to_string()) {
            Entry::Vacant(vacant) => {
                vacant.insert(self.fresh_window(now));
                Ok(())
            }
            Entry::Occupied(mut occupied) => {
                let record = occupied.get_mut();
                if now > record.reset_at {
                    *record = self.fresh_window(now);
                    Ok(())
                } else if record.count >= self.max_requests {
                    Err(Error::RateLimitExceeded)
                } else {
                    record.count += 1;
                    Ok(())
                }
            }
        }
    }

    fn fresh_window(&self, now: Instant) -> WindowRecord {
        WindowRecord {
            count: 1,
            reset_at: now + self.window,
        }
    }

    /// Requests recorded for `client` in its current window
    pub fn count(&self, client: &str) -> Option<u32> {
        self.records.get(client).map(|record| record.count)
    }

    /// Drop records whose window has expired
    pub fn sweep_expired(&self, now: Instant) -> usize {
        let before = self.records.len();
        self.records.retain(|_, record| now <= record.reset_at);
        before - self.records.len()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Periodically evict expired records
    pub fn spawn_cleanup(self: &Arc<Self>, every: Duration) -> JoinHandle<()> {
        let store = Arc::clone(self);
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(every);
            loop {
                interval.tick().await;
                let removed = store.sweep_expired(Instant::now());
                if removed > 0 {
                    debug!(removed, remaining = store.len(), "Evicted expired rate limit records");
                }
            }
        })
    }
}

/// Resolve the client identifier from forwarding headers.
///
/// Uses the first `x-forwarded-for` entry, then `x-real-ip`, then
/// [`UNKNOWN_CLIENT`]. Blank values fall through.
pub fn client_identifier(headers: &HeaderMap) -> String {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(',').next())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    };

    header(FORWARDED_FOR)
        .or_else(|| header(REAL_IP))
        .unwrap_or_else(|| UNKNOWN_CLIENT.to_string())
}

/// Rate limit handler for axum middleware
pub async fn rate_limit_middleware(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response> {
    let client = client_identifier(req.headers());
    counter!("recipe_api_requests_total").increment(1);

    if let Err(e) = state.rate_limiter.check(&client) {
        counter!("recipe_api_rate_limited_total").increment(1);
        debug!(client = %client, "Rate limit exceeded");
        return Err(e);
    }

    Ok(next.run(req).await)
}
