//! Configuration module for the recipe broker

mod rate_limit;
mod server;
mod telemetry;
mod upstream;
mod validation;

pub use rate_limit::RateLimitConfig;
pub use server::{Environment, ServerConfig};
pub use telemetry::TelemetryConfig;
pub use upstream::{UpstreamConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use validation::ValidationConfig;

use common::config::{load_config_with_options, ConfigLoader, LoadOptions};
use common::ConfigurationError as ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable prefix, e.g. `RECIPE_API_UPSTREAM__MODEL`
pub const ENV_PREFIX: &str = "RECIPE_API";

/// Configuration file looked up when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "recipe-api.toml";

/// Conventional variable holding the upstream credential
pub const API_KEY_ENV: &str = "GROQ_API_KEY";

/// Main configuration structure for the recipe broker
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,

    /// Rate limiting configuration
    pub rate_limit: RateLimitConfig,

    /// Ingredient validation limits
    pub validation: ValidationConfig,

    /// Upstream completion API
    pub upstream: UpstreamConfig,

    /// Telemetry configuration
    pub telemetry: TelemetryConfig,
}

impl Config {
    /// Load configuration from file and environment
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        match config_path {
            Some(path) => <Config as ConfigLoader<Config>>::load_from_file(path),
            None => <Config as ConfigLoader<Config>>::load(None),
        }
    }

    /// Generate example configuration file
    pub fn generate_example() -> Result<String, ConfigError> {
        let config = Self::default();
        toml::to_string_pretty(&config).map_err(|e| ConfigError::ParseError {
            details: format!("Failed to serialize config: {e}"),
        })
    }

    /// Rate limit window as Duration
    pub fn rate_limit_window(&self) -> Duration {
        Duration::from_secs(self.rate_limit.window_secs)
    }

    /// Rate limit cleanup interval as Duration
    pub fn cleanup_interval(&self) -> Duration {
        Duration::from_secs(self.rate_limit.cleanup_interval_secs)
    }

    /// Upstream timeout, if one is configured
    pub fn upstream_timeout(&self) -> Option<Duration> {
        self.upstream.timeout_secs.map(Duration::from_secs)
    }

    fn options() -> LoadOptions {
        LoadOptions::new(ENV_PREFIX).with_alias(API_KEY_ENV, "upstream.api_key")
    }
}

impl ConfigLoader<Config> for Config {
    fn load(path: Option<PathBuf>) -> Result<Config, ConfigError> {
        let options = match path {
            Some(p) => Self::options().with_file(&p, false),
            None => Self::options().with_default_file(DEFAULT_CONFIG_FILE),
        };

        let config: Config = load_config_with_options(&options)?;
        Self::validate(&config)?;
        Ok(config)
    }

    fn load_from_file(path: &Path) -> Result<Config, ConfigError> {
        let config: Config = load_config_with_options(&Self::options().with_file(path, true))?;
        Self::validate(&config)?;
        Ok(config)
    }

    fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.rate_limit.requests_per_window == 0 {
            return Err(ConfigError::invalid(
                "rate_limit.requests_per_window",
                0,
                "must be at least 1",
            ));
        }
        if config.rate_limit.window_secs == 0 {
            return Err(ConfigError::invalid(
                "rate_limit.window_secs",
                0,
                "must be at least 1",
            ));
        }
        if config.rate_limit.cleanup_interval_secs == 0 {
            return Err(ConfigError::invalid(
                "rate_limit.cleanup_interval_secs",
                0,
                "must be at least 1",
            ));
        }
        if config.validation.max_ingredients == 0 {
            return Err(ConfigError::invalid(
                "validation.max_ingredients",
                0,
                "must be at least 1",
            ));
        }
        if config.validation.max_ingredient_length == 0 {
            return Err(ConfigError::invalid(
                "validation.max_ingredient_length",
                0,
                "must be at least 1",
            ));
        }
        if reqwest::Url::parse(&config.upstream.base_url).is_err() {
            return Err(ConfigError::invalid(
                "upstream.base_url",
                &config.upstream.base_url,
                "not a valid URL",
            ));
        }
        if !(0.0..=2.0).contains(&config.upstream.temperature) {
            return Err(ConfigError::invalid(
                "upstream.temperature",
                config.upstream.temperature,
                "must be between 0 and 2",
            ));
        }
        if !config.telemetry.metrics_path.starts_with('/') {
            return Err(ConfigError::invalid(
                "telemetry.metrics_path",
                &config.telemetry.metrics_path,
                "must start with '/'",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.bind_address.port(), 3000);
        assert_eq!(config.server.environment, Environment::Production);
        assert_eq!(config.rate_limit.requests_per_window, 10);
        assert_eq!(config.rate_limit.window_secs, 60);
        assert_eq!(config.validation.max_ingredients, 50);
        assert_eq!(config.validation.max_ingredient_length, 100);
        assert_eq!(config.upstream.model, "llama-3.3-70b-versatile");
        assert_eq!(config.upstream.max_tokens, 2000);
        assert!(config.upstream.api_key.is_none());
        assert!(!config.upstream.validate_schema);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let serialized = toml::to_string(&config).unwrap();
        let deserialized: Config = toml::from_str(&serialized).unwrap();

        assert_eq!(config.server.bind_address, deserialized.server.bind_address);
        assert_eq!(config.upstream.model, deserialized.upstream.model);
        assert_eq!(
            config.rate_limit.requests_per_window,
            deserialized.rate_limit.requests_per_window
        );
    }

    #[test]
    fn test_generate_example_omits_secrets() {
        let example = Config::generate_example().unwrap();
        assert!(example.contains("[upstream]"));
        assert!(!example.contains("api_key"));
    }

    #[test]
    fn test_duration_conversions() {
        let config = Config::default();
        assert_eq!(config.rate_limit_window(), Duration::from_secs(60));
        assert_eq!(config.cleanup_interval(), Duration::from_secs(300));
        assert_eq!(config.upstream_timeout(), None);
    }

    #[test]
    fn test_validation_rejects_zero_window() {
        let mut config = Config::default();
        config.rate_limit.window_secs = 0;
        assert!(matches!(
            Config::validate(&config),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_validation_rejects_bad_url_and_temperature() {
        let mut config = Config::default();
        config.upstream.base_url = "not a url".to_string();
        assert!(Config::validate(&config).is_err());

        let mut config = Config::default();
        config.upstream.temperature = 3.5;
        assert!(Config::validate(&config).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let toml_content = r#"
            [server]
            bind_address = "127.0.0.1:8088"
            environment = "development"
            cors_origins = ["http://localhost:5173"]

            [rate_limit]
            requests_per_window = 3
            window_secs = 10
            cleanup_interval_secs = 30

            [upstream]
            base_url = "http://127.0.0.1:9000/v1"
            model = "llama-3.1-8b-instant"
            temperature = 0.2
            max_tokens = 512
            validate_schema = true
        "#;

        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(toml_content.as_bytes()).unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.server.bind_address.port(), 8088);
        assert!(config.server.is_development());
        assert_eq!(config.rate_limit.requests_per_window, 3);
        assert_eq!(config.upstream.model, "llama-3.1-8b-instant");
        assert!(config.upstream.validate_schema);
        // untouched sections keep their defaults
        assert_eq!(config.validation.max_ingredients, 50);
    }
}
