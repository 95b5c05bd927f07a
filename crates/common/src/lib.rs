//! # Common
//!
//! Shared building blocks for the Fridge Friend crates.
//!
//! ## Key Features
//! - `FridgeError` marker trait implemented by every crate error type
//! - `ConfigurationError` for configuration loading and validation
//! - Figment-based layered configuration loading (defaults, TOML, environment)

pub mod config;
pub mod error;

pub use config::*;
pub use error::*;

/// Version of the common crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constant() {
        assert!(VERSION.chars().any(|c| c.is_ascii_digit()));
    }
}
