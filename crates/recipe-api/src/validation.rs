//! Request validation and ingredient sanitization
//!
//! Checks run in a fixed order and the first failure wins. Ingredient strings
//! end up in a prompt, so everything outside a small character set is removed.

use crate::{
    config::ValidationConfig,
    error::{Error, Result},
};
use serde_json::Value;

const NO_INGREDIENTS: &str = "No ingredients provided";
const NOT_AN_ARRAY: &str = "Ingredients must be an array";
const NO_VALID_INGREDIENTS: &str = "No valid ingredients provided";
const INVALID_BODY: &str = "Invalid request body";

/// Parse a raw request body as JSON
pub fn parse_body(body: &[u8]) -> Result<Value> {
    serde_json::from_slice(body).map_err(|_| Error::invalid(INVALID_BODY))
}

/// Validate a request body and return the sanitized ingredient list
pub fn validate_request(body: &Value, limits: &ValidationConfig) -> Result<Vec<String>> {
    let ingredients = match body.get("ingredients") {
        Some(value) if !is_falsy(value) => value,
        _ => return Err(Error::invalid(NO_INGREDIENTS)),
    };

    let items = ingredients
        .as_array()
        .ok_or_else(|| Error::invalid(NOT_AN_ARRAY))?;

    if items.is_empty() {
        return Err(Error::invalid(NO_INGREDIENTS));
    }

    if items.len() > limits.max_ingredients {
        return Err(Error::invalid(format!(
            "Too many ingredients. Maximum is {}",
            limits.max_ingredients
        )));
    }

    let sanitized: Vec<String> = items
        .iter()
        .filter_map(Value::as_str)
        .map(|item| sanitize_ingredient(item, limits.max_ingredient_length))
        .filter(|item| !item.is_empty())
        .collect();

    if sanitized.is_empty() {
        return Err(Error::invalid(NO_VALID_INGREDIENTS));
    }

    Ok(sanitized)
}

/// Trim, lowercase, keep only `[a-z0-9 \-'.]` and cap at `max_len` characters.
pub fn sanitize_ingredient(raw: &str, max_len: usize) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .filter(|c| is_allowed(*c))
        .take(max_len)
        .collect()
}

fn is_allowed(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, ' ' | '-' | '\'' | '.')
}

/// JavaScript-style truthiness: `null`, `false`, `0` and `""` count as absent.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
