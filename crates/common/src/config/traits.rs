//! # Configuration Traits

use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

use crate::error::ConfigurationError;

/// Configuration loader trait
///
/// Provides a standardized interface for loading configuration with layered
/// support (defaults -> file -> environment variables).
pub trait ConfigLoader<C: DeserializeOwned + Send + Sync> {
    /// Load configuration with optional path override
    ///
    /// # Implementation Notes
    /// - Should support layered configuration (defaults -> file -> env vars)
    /// - Should validate configuration after loading
    fn load(path_override: Option<PathBuf>) -> Result<C, ConfigurationError>;

    /// Load configuration from a specific file, which must exist
    fn load_from_file(path: &Path) -> Result<C, ConfigurationError>;

    /// Validate a loaded configuration
    fn validate(config: &C) -> Result<(), ConfigurationError>;
}
