//! Main server implementation for the recipe broker

use crate::{
    api::{self, middleware::RateLimitStore},
    config::Config,
    error::{Error, Result},
    upstream::CompletionClient,
};
use axum::Router;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::Arc;
use tokio::{signal, task::JoinHandle};
use tracing::{error, info, warn};

/// Main server structure
pub struct Server {
    config: Arc<Config>,
    app: Router,
    cleanup: JoinHandle<()>,
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<Config>,

    /// Per-client request windows
    pub rate_limiter: Arc<RateLimitStore>,

    /// Upstream completion client
    pub upstream: CompletionClient,

    /// Prometheus handle, present when metrics are exported
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Build state from configuration
    pub fn new(config: Arc<Config>, metrics: Option<PrometheusHandle>) -> Result<Self> {
        let rate_limiter = Arc::new(RateLimitStore::from_config(&config));
        let upstream = CompletionClient::new(
            config.upstream.clone(),
            config.upstream_timeout(),
            config.server.is_development(),
        )?;

        Ok(Self {
            config,
            rate_limiter,
            upstream,
            metrics,
        })
    }
}

impl Server {
    /// Create a new server instance
    pub async fn new(config: Config) -> Result<Self> {
        info!("Initializing recipe broker");

        if config.upstream.api_key().is_none() {
            warn!("GROQ_API_KEY is not set; recipe requests will fail until it is configured");
        }

        let config = Arc::new(config);

        let metrics = if config.telemetry.enable_metrics {
            let handle = PrometheusBuilder::new()
                .install_recorder()
                .map_err(|e| Error::Internal {
                    message: format!("Failed to install metrics recorder: {e}"),
                })?;
            Some(handle)
        } else {
            None
        };

        let state = AppState::new(config.clone(), metrics)?;
        let cleanup = state
            .rate_limiter
            .spawn_cleanup(config.cleanup_interval());

        let app = Self::build_router(state);

        Ok(Self {
            config,
            app,
            cleanup,
        })
    }

    /// Build the application router with all routes and middleware
    pub fn build_router(state: AppState) -> Router {
        api::routes(&state).with_state(state)
    }

    /// Run the server until shutdown signal
    pub async fn run(self) -> Result<()> {
        let addr = self.config.server.bind_address;

        info!("Starting HTTP server on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| Error::Internal {
                message: format!("Failed to bind to address {addr}: {e}"),
            })?;

        info!("Recipe broker listening on {}", addr);

        let result = axum::serve(listener, self.app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| Error::Internal {
                message: format!("Server error: {e}"),
            });

        self.cleanup.abort();
        result
    }
}

/// Shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install terminate handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            warn!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            warn!("Received terminate signal, shutting down");
        },
    }
}
