//! Display model derived from session state

use crate::ingredients::IngredientList;
use crate::input::{IngredientInput, PLACEHOLDER};
use protocol::Recipe;

pub const TITLE: &str = "Fridge Friend";
pub const TAGLINE: &str = "Turn your ingredients into delicious recipes";
pub const PROMPT: &str = "What ingredients do you have?";
pub const CLEAR_ALL_LABEL: &str = "Clear All";
pub const GENERATE_LABEL: &str = "Generate Recipe";
pub const GENERATING_LABEL: &str = "Generating...";
pub const LOADING_MESSAGE: &str = "Generating your perfect recipe...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionItem {
    pub text: String,
    pub highlighted: bool,
}

/// Ingredient chip with its remove action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chip {
    pub ingredient: String,
    pub remove_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: &'static str,
    pub disabled: bool,
}

/// Everything a front-end shows for one session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub placeholder: &'static str,
    pub buffer: String,
    pub suggestions: Vec<SuggestionItem>,
    /// "Your Ingredients (n)", only with a non-empty working set
    pub heading: Option<String>,
    pub chips: Vec<Chip>,
    pub clear_all: Option<&'static str>,
    pub generate: Option<Button>,
    pub error: Option<String>,
    pub loading_message: Option<&'static str>,
    pub recipe: Option<Recipe>,
}

impl View {
    pub fn build(
        ingredients: &IngredientList,
        input: &IngredientInput,
        recipe: Option<&Recipe>,
        loading: bool,
        error: Option<&str>,
    ) -> Self {
        let has_ingredients = !ingredients.is_empty();

        let suggestions = input
            .suggestions()
            .iter()
            .enumerate()
            .map(|(i, text)| SuggestionItem {
                text: text.to_string(),
                highlighted: input.selected() == Some(i),
            })
            .collect();

        let chips = ingredients
            .iter()
            .map(|ingredient| Chip {
                ingredient: ingredient.to_string(),
                remove_label: format!("Remove {ingredient}"),
            })
            .collect();

        Self {
            placeholder: PLACEHOLDER,
            buffer: input.buffer().to_string(),
            suggestions,
            heading: has_ingredients.then(|| format!("Your Ingredients ({})", ingredients.len())),
            chips,
            clear_all: has_ingredients.then_some(CLEAR_ALL_LABEL),
            generate: has_ingredients.then_some(Button {
                label: if loading { GENERATING_LABEL } else { GENERATE_LABEL },
                disabled: loading,
            }),
            error: error.map(str::to_string),
            loading_message: loading.then_some(LOADING_MESSAGE),
            recipe: if loading { None } else { recipe.cloned() },
        }
    }
}

/// Plain-text rendering of a recipe
pub fn render_recipe(recipe: &Recipe) -> String {
    let mut lines: Vec<String> = vec![recipe.title.clone()];
    if !recipe.description.is_empty() {
        lines.push(recipe.description.clone());
    }
    lines.push(String::new());

    let facts: Vec<String> = [
        ("Prep", &recipe.prep_time),
        ("Cook", &recipe.cook_time),
        ("Servings", &recipe.servings),
    ]
    .iter()
    .filter(|(_, value)| !value.is_empty())
    .map(|(label, value)| format!("{label}: {value}"))
    .collect();
    if !facts.is_empty() {
        lines.push(facts.join(" | "));
        lines.push(String::new());
    }

    if !recipe.ingredients_used.is_empty() {
        lines.push(format!(
            "Using Your Ingredients: {}",
            recipe.ingredients_used.join(", ")
        ));
        lines.push(String::new());
    }

    lines.push("Ingredients".to_string());
    lines.extend(recipe.ingredients.iter().map(|ingredient| format!("  - {ingredient}")));

    lines.push(String::new());
    lines.push("Instructions".to_string());
    lines.extend(
        recipe
            .instructions
            .iter()
            .enumerate()
            .map(|(i, step)| format!("  {}. {step}", i + 1)),
    );

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
