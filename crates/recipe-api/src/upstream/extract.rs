//! Recipe extraction from free-form model output
//!
//! Models often wrap the JSON in prose or markdown fences. The span from the
//! first `{` to the last `}` is parsed; content without such a span is parsed
//! as-is.

use crate::error::{Error, Result};
use protocol::Recipe;
use serde_json::Value;

/// Span from the first `{` to the last `}` after it
pub fn json_span(content: &str) -> Option<&str> {
    let start = content.find('{')?;
    let end = content.rfind('}')?;
    (end > start).then(|| &content[start..=end])
}

/// Parse model output into a recipe payload.
///
/// With `validate_schema` the payload must match [`Recipe`]; otherwise any
/// JSON value is accepted as-is.
pub fn parse_recipe(content: &str, validate_schema: bool) -> Result<Value> {
    let candidate = json_span(content).unwrap_or(content);

    let value: Value = serde_json::from_str(candidate).map_err(|e| Error::RecipeParse {
        details: e.to_string(),
    })?;

    if validate_schema {
        serde_json::from_value::<Recipe>(value.clone()).map_err(|e| Error::RecipeParse {
            details: format!("Recipe does not match schema: {e}"),
        })?;
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const FENCED: &str = "Here is your recipe:\n```json\n{\"title\": \"Fried Rice\", \"tags\": {\"quick\": true}}\n```\nEnjoy!";

    #[test]
    fn test_json_span_is_greedy() {
        assert_eq!(
            json_span(FENCED),
            Some("{\"title\": \"Fried Rice\", \"tags\": {\"quick\": true}}")
        );
        assert_eq!(json_span("no braces here"), None);
        assert_eq!(json_span("} backwards {"), None);
    }

    #[test]
    fn test_parse_fenced_recipe() {
        let value = parse_recipe(FENCED, false).unwrap();
        assert_eq!(value["title"], "Fried Rice");
        assert_eq!(value["tags"]["quick"], true);
    }

    #[test]
    fn test_falls_back_to_raw_content() {
        assert_eq!(parse_recipe("[1, 2]", false).unwrap(), json!([1, 2]));
    }

    #[test]
    fn test_unparseable_content() {
        let err = parse_recipe("Sorry, I can't help with that.", false).unwrap_err();
        assert!(matches!(err, Error::RecipeParse { .. }));

        // two separate objects make the greedy span invalid JSON
        let err = parse_recipe("{\"a\": 1} and {\"b\": 2}", false).unwrap_err();
        assert!(matches!(err, Error::RecipeParse { .. }));
    }

    #[test]
    fn test_schema_validation_is_opt_in() {
        let partial = "{\"title\": \"Just a title\"}";
        assert!(parse_recipe(partial, false).is_ok());
        assert!(matches!(
            parse_recipe(partial, true),
            Err(Error::RecipeParse { .. })
        ));

        let full = json!({
            "title": "Egg Fried Rice",
            "description": "Quick and savory",
            "ingredientsUsed": ["egg", "rice"],
            "ingredients": ["2 eggs", "1 cup rice"],
            "instructions": ["Scramble eggs", "Add rice"],
            "prepTime": "5 minutes",
            "cookTime": "10 minutes",
            "servings": "2 servings"
        });
        let parsed = parse_recipe(&full.to_string(), true).unwrap();
        assert_eq!(parsed, full);
    }
}
