//! Server configuration

use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, SocketAddr};

/// Deployment environment. Diagnostic detail about upstream failures is only
/// logged in development.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    Development,
    #[default]
    Production,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server bind address
    pub bind_address: SocketAddr,

    /// Deployment environment
    pub environment: Environment,

    /// CORS allowed origins, `*` allows any
    pub cors_origins: Vec<String>,
}

impl ServerConfig {
    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from((Ipv4Addr::UNSPECIFIED, 3000)),
            environment: Environment::default(),
            cors_origins: vec!["*".to_string()],
        }
    }
}
