//! # Protocol
//!
//! Message types for the recipe generation HTTP contract shared by the
//! broker (`recipe-api`) and the client (`pantry`).
//!
//! ## Endpoint
//!
//! `POST /api/generate-recipe`
//!
//! - request: [`GenerateRecipeRequest`]
//! - 200: [`GenerateRecipeResponse`]
//! - 4xx/5xx: [`ErrorBody`]
//!
//! The broker does not validate the recipe payload against [`Recipe`] unless
//! told to, so the response carries it as raw JSON and clients decode it with
//! [`GenerateRecipeResponse::into_recipe`].

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Path of the recipe generation endpoint
pub const GENERATE_RECIPE_PATH: &str = "/api/generate-recipe";

/// A generated recipe. All fields are display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Recipe name
    pub title: String,

    /// Short description
    pub description: String,

    /// Which of the submitted ingredients the recipe uses
    pub ingredients_used: Vec<String>,

    /// Full ingredient list with measurements
    pub ingredients: Vec<String>,

    /// Ordered preparation steps
    pub instructions: Vec<String>,

    /// e.g. "10 minutes"
    pub prep_time: String,

    /// e.g. "25 minutes"
    pub cook_time: String,

    /// e.g. "2 servings"
    pub servings: String,
}

/// Request body for recipe generation
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GenerateRecipeRequest {
    /// Ingredient names
    pub ingredients: Vec<String>,
}

impl GenerateRecipeRequest {
    pub fn new(ingredients: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            ingredients: ingredients.into_iter().map(Into::into).collect(),
        }
    }
}

/// Successful generation response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GenerateRecipeResponse {
    /// The recipe as returned by the model
    #[schema(value_type = Recipe)]
    pub recipe: serde_json::Value,
}

impl GenerateRecipeResponse {
    /// Decode the payload into a typed [`Recipe`]
    pub fn into_recipe(self) -> serde_json::Result<Recipe> {
        serde_json::from_value(self.recipe)
    }
}

/// Uniform error body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable error message
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> serde_json::Value {
        json!({
            "title": "Tomato Chicken Skillet",
            "description": "Juicy chicken in a quick tomato sauce",
            "ingredientsUsed": ["chicken", "tomato"],
            "ingredients": ["2 chicken breasts", "3 tomatoes"],
            "instructions": ["Sear the chicken", "Add tomatoes"],
            "prepTime": "10 minutes",
            "cookTime": "20 minutes",
            "servings": "2 servings"
        })
    }

    #[test]
    fn test_recipe_uses_camel_case_on_the_wire() {
        let recipe: Recipe = serde_json::from_value(sample()).unwrap();
        assert_eq!(recipe.ingredients_used, vec!["chicken", "tomato"]);
        assert_eq!(recipe.prep_time, "10 minutes");

        let value = serde_json::to_value(&recipe).unwrap();
        assert!(value.get("cookTime").is_some());
        assert!(value.get("cook_time").is_none());
    }

    #[test]
    fn test_into_recipe_rejects_wrong_shape() {
        let response = GenerateRecipeResponse {
            recipe: json!({ "title": "Only a title" }),
        };
        assert!(response.into_recipe().is_err());
    }

    #[test]
    fn test_error_body_shape() {
        let body = serde_json::to_value(ErrorBody::new("No ingredients provided")).unwrap();
        assert_eq!(body, json!({ "error": "No ingredients provided" }));
    }
}
