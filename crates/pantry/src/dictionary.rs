//! Static ingredient dictionary used for suggestions

/// Maximum number of suggestions offered at once
pub const MAX_SUGGESTIONS: usize = 8;

/// Known ingredients, in suggestion order
pub const COMMON_INGREDIENTS: &[&str] = &[
    // proteins
    "chicken breast",
    "chicken thighs",
    "ground beef",
    "beef steak",
    "pork chops",
    "bacon",
    "ham",
    "sausage",
    "salmon",
    "tuna",
    "shrimp",
    "cod",
    "tofu",
    "tempeh",
    "eggs",
    "chickpeas",
    "black beans",
    "kidney beans",
    "lentils",
    // vegetables
    "onion",
    "red onion",
    "garlic",
    "tomato",
    "cherry tomatoes",
    "potato",
    "sweet potato",
    "carrot",
    "celery",
    "bell pepper",
    "jalapeño",
    "chili pepper",
    "broccoli",
    "cauliflower",
    "spinach",
    "kale",
    "lettuce",
    "cabbage",
    "zucchini",
    "eggplant",
    "cucumber",
    "mushrooms",
    "corn",
    "peas",
    "green beans",
    "asparagus",
    "avocado",
    "ginger",
    "scallions",
    "chives",
    // fruit
    "lemon",
    "lime",
    "apple",
    "banana",
    "orange",
    "strawberries",
    "blueberries",
    "pineapple",
    "mango",
    // dairy
    "milk",
    "butter",
    "heavy cream",
    "sour cream",
    "yogurt",
    "cheddar cheese",
    "mozzarella",
    "parmesan",
    "feta",
    "cream cheese",
    // grains and pantry
    "rice",
    "brown rice",
    "pasta",
    "spaghetti",
    "noodles",
    "bread",
    "tortillas",
    "flour",
    "oats",
    "quinoa",
    "breadcrumbs",
    "sugar",
    "brown sugar",
    "honey",
    "maple syrup",
    "olive oil",
    "vegetable oil",
    "sesame oil",
    "soy sauce",
    "vinegar",
    "balsamic vinegar",
    "mustard",
    "ketchup",
    "mayonnaise",
    "hot sauce",
    "peanut butter",
    "coconut milk",
    "chicken broth",
    "vegetable broth",
    "canned tomatoes",
    "tomato paste",
    // herbs and spices
    "basil",
    "parsley",
    "cilantro",
    "oregano",
    "thyme",
    "rosemary",
    "cumin",
    "paprika",
    "chili powder",
    "cinnamon",
    "turmeric",
    "curry powder",
    "red pepper flakes",
    // nuts
    "almonds",
    "walnuts",
    "peanuts",
    "cashews",
];

/// Dictionary entries containing `query`, minus those in `exclude`.
///
/// Matching is a case-insensitive substring test against the query as typed;
/// the caller decides whether a blank query should produce suggestions.
pub fn suggest(query: &str, exclude: &[String]) -> Vec<&'static str> {
    let needle = query.to_lowercase();
    COMMON_INGREDIENTS
        .iter()
        .copied()
        .filter(|entry| entry.to_lowercase().contains(&needle))
        .filter(|entry| !exclude.iter().any(|taken| taken == entry))
        .take(MAX_SUGGESTIONS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dictionary_is_lowercase_and_unique() {
        for (i, entry) in COMMON_INGREDIENTS.iter().enumerate() {
            assert_eq!(entry.to_lowercase(), *entry);
            assert!(
                !COMMON_INGREDIENTS[i + 1..].contains(entry),
                "duplicate entry {entry}"
            );
        }
    }

    #[test]
    fn test_suggest_substring_in_dictionary_order() {
        let found = suggest("chi", &[]);
        assert_eq!(found[0], "chicken breast");
        assert!(found.contains(&"zucchini"));
        assert!(found.iter().all(|entry| entry.contains("chi")));
    }

    #[test]
    fn test_suggest_is_case_insensitive() {
        assert_eq!(suggest("SALM", &[]), vec!["salmon"]);
    }

    #[test]
    fn test_suggest_excludes_working_set() {
        let taken = vec!["chicken breast".to_string()];
        let found = suggest("chicken", &taken);
        assert!(!found.contains(&"chicken breast"));
        assert!(found.contains(&"chicken thighs"));
    }

    #[test]
    fn test_suggest_caps_results() {
        assert_eq!(suggest("a", &[]).len(), MAX_SUGGESTIONS);
        assert!(suggest("dragonfruit", &[]).is_empty());
    }
}
