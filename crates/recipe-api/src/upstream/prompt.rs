//! Prompt construction for recipe generation

/// Ingredients every kitchen is assumed to have
pub const ALWAYS_AVAILABLE: [&str; 4] = ["salt", "black pepper", "water", "cooking oil"];

const RESPONSE_SCHEMA: &str = r#"{
  "title": "Creative Recipe Name",
  "description": "Brief mouth-watering description",
  "ingredientsUsed": ["list", "of", "my", "ingredients", "you", "used"],
  "ingredients": ["full ingredient list with measurements"],
  "instructions": ["step 1", "step 2", "etc"],
  "prepTime": "X minutes",
  "cookTime": "X minutes",
  "servings": "X servings"
}"#;

/// Build the generation prompt for an already sanitized ingredient list
pub fn build_prompt(ingredients: &[String]) -> String {
    let exceptions = format!(
        "{}, and {}",
        ALWAYS_AVAILABLE[..ALWAYS_AVAILABLE.len() - 1].join(", "),
        ALWAYS_AVAILABLE[ALWAYS_AVAILABLE.len() - 1]
    );

    format!(
        "You are a creative and talented chef. Create an INCREDIBLY DELICIOUS recipe using ONLY the ingredients I have.

MY INGREDIENTS: {ingredients}

CRITICAL RULES:
- You MUST use AS MANY of my ingredients AS POSSIBLE
- You can ONLY use ingredients from my list above
- The ONLY exceptions are: {exceptions} (these are assumed to be in every kitchen)
- DO NOT add ANY other ingredients, even common ones like garlic, onion, herbs, spices, etc., unless I explicitly listed them
- Make the recipe AS TASTY AS POSSIBLE using only what I have
- Be creative with cooking techniques (grilling, sautéing, baking, etc.) to maximize flavor
- Include proper seasoning with salt and pepper to enhance taste

Recipe Requirements:
- Include prep time, cook time, and servings
- Provide clear, detailed step-by-step instructions
- Make it practical and achievable

Return the recipe in the following JSON format:
{RESPONSE_SCHEMA}

Return ONLY the JSON, no additional text.",
        ingredients = ingredients.join(", "),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_ingredients_in_order() {
        let prompt = build_prompt(&["chicken".to_string(), "rice".to_string()]);
        assert!(prompt.contains("MY INGREDIENTS: chicken, rice\n"));
    }

    #[test]
    fn test_prompt_lists_exceptions_and_schema() {
        let prompt = build_prompt(&["egg".to_string()]);
        assert!(prompt.contains("salt, black pepper, water, and cooking oil"));
        assert!(prompt.contains("\"ingredientsUsed\""));
        assert!(prompt.ends_with("Return ONLY the JSON, no additional text."));
    }
}
