//! # Configuration Abstractions
//!
//! Layered configuration loading shared by the Fridge Friend binaries.

pub mod loader;
pub mod traits;

pub use loader::*;
pub use traits::*;
