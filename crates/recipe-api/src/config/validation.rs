//! Ingredient validation limits

use serde::{Deserialize, Serialize};

/// Limits applied to incoming ingredient lists
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Maximum number of ingredients per request
    pub max_ingredients: usize,

    /// Maximum characters kept per ingredient after sanitization
    pub max_ingredient_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_ingredients: 50,
            max_ingredient_length: 100,
        }
    }
}
