//! # Configuration Loader
//!
//! Figment-based configuration loading with layered support:
//! 1. Compiled defaults
//! 2. TOML configuration file
//! 3. Environment variable overrides (prefixed, `__` for nesting)
//! 4. Raw environment aliases mapped onto single keys
//!
//! Later layers win.

use crate::error::ConfigurationError;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{de::DeserializeOwned, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Maps an unprefixed environment variable onto a dotted configuration key,
/// e.g. `GROQ_API_KEY` onto `upstream.api_key`.
#[derive(Debug, Clone)]
pub struct EnvAlias {
    /// Environment variable name
    pub var: String,
    /// Dotted configuration key
    pub key: String,
}

impl EnvAlias {
    pub fn new(var: &str, key: &str) -> Self {
        Self {
            var: var.to_string(),
            key: key.to_string(),
        }
    }
}

/// Configuration loading options
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Explicit configuration file; takes precedence over `default_file`
    pub config_path: Option<PathBuf>,
    /// File looked up when no explicit path is given
    pub default_file: Option<PathBuf>,
    /// Environment variable prefix, without the trailing underscore
    pub env_prefix: String,
    /// Whether the configuration file must exist
    pub require_file: bool,
    /// Unprefixed environment variables mapped onto configuration keys
    pub env_aliases: Vec<EnvAlias>,
}

impl LoadOptions {
    pub fn new(env_prefix: &str) -> Self {
        Self {
            config_path: None,
            default_file: None,
            env_prefix: env_prefix.to_string(),
            require_file: false,
            env_aliases: Vec::new(),
        }
    }

    pub fn with_file(mut self, path: &Path, required: bool) -> Self {
        self.config_path = Some(path.to_path_buf());
        self.require_file = required;
        self
    }

    pub fn with_default_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.default_file = Some(path.into());
        self
    }

    pub fn with_alias(mut self, var: &str, key: &str) -> Self {
        self.env_aliases.push(EnvAlias::new(var, key));
        self
    }
}

/// Load configuration with custom options
pub fn load_config_with_options<T>(options: &LoadOptions) -> Result<T, ConfigurationError>
where
    T: Default + DeserializeOwned + Serialize,
{
    debug!("Loading configuration with options: {:?}", options);

    let mut figment = Figment::new().merge(Serialized::defaults(T::default()));

    let path = options
        .config_path
        .as_ref()
        .or(options.default_file.as_ref());

    if let Some(path) = path {
        if path.exists() {
            info!("Loading configuration from file: {}", path.display());
            figment = add_file_provider(figment, path)?;
        } else if options.require_file {
            return Err(ConfigurationError::FileNotFound {
                path: path.display().to_string(),
            });
        } else {
            warn!(
                "Configuration file not found: {} (using defaults)",
                path.display()
            );
        }
    }

    figment = figment.merge(
        Env::prefixed(&format!("{}_", options.env_prefix))
            .split("__")
            .ignore(&["PATH", "HOME", "USER"]),
    );

    for alias in &options.env_aliases {
        let key = alias.key.clone();
        figment = figment.merge(
            Env::raw()
                .only(&[alias.var.as_str()])
                .map(move |_| key.clone().into()),
        );
    }

    let config: T = figment
        .extract()
        .map_err(|err| ConfigurationError::ParseError {
            details: format!("Failed to parse configuration: {err}"),
        })?;

    debug!(
        "Configuration loaded from {} sources",
        figment.metadata().count()
    );

    Ok(config)
}

/// Add file provider to figment based on file extension
fn add_file_provider(figment: Figment, path: &Path) -> Result<Figment, ConfigurationError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("toml");

    match extension.to_lowercase().as_str() {
        "toml" => Ok(figment.merge(Toml::file(path))),
        _ => Err(ConfigurationError::ParseError {
            details: format!(
                "Unsupported configuration file format: {extension} (supported: toml)"
            ),
        }),
    }
}
