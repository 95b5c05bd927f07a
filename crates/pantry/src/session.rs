//! Page-level state: working set, input, current recipe and error

use crate::error::{ClientError, GENERIC_FAILURE};
use crate::ingredients::IngredientList;
use crate::input::{IngredientInput, Key};
use crate::view::View;
use crate::voice::{SpeechEngine, SpeechEvent, VoiceInput};
use async_trait::async_trait;
use protocol::Recipe;
use tracing::{debug, info, warn};

#[cfg(test)]
use mockall::automock;

/// Error shown when generating with an empty working set
pub const EMPTY_SET_ERROR: &str = "Please add at least one ingredient";

/// Source of recipes
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RecipeGenerator: Send + Sync {
    async fn generate(&self, ingredients: &[String]) -> Result<Recipe, ClientError>;
}

/// One user's session
pub struct Session<G> {
    generator: G,
    ingredients: IngredientList,
    input: IngredientInput,
    recipe: Option<Recipe>,
    loading: bool,
    error: Option<String>,
}

impl<G: RecipeGenerator> Session<G> {
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            ingredients: IngredientList::new(),
            input: IngredientInput::new(),
            recipe: None,
            loading: false,
            error: None,
        }
    }

    pub fn ingredients(&self) -> &IngredientList {
        &self.ingredients
    }

    pub fn input(&self) -> &IngredientInput {
        &self.input
    }

    pub fn recipe(&self) -> Option<&Recipe> {
        self.recipe.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Add an ingredient. Any shown error is cleared, even for duplicates.
    pub fn add_ingredient(&mut self, raw: &str) -> bool {
        let added = self.ingredients.add(raw);
        self.error = None;
        self.input.refresh(&self.ingredients);
        added
    }

    pub fn add_all<I, S>(&mut self, items: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for item in items {
            self.add_ingredient(item.as_ref());
        }
    }

    /// Feed a recognition event to `voice` and add whatever it heard
    pub fn hear<E: SpeechEngine>(&mut self, voice: &mut VoiceInput<E>, event: SpeechEvent) {
        let heard = voice.handle_event(event);
        self.add_all(heard);
    }

    pub fn remove_ingredient(&mut self, ingredient: &str) -> bool {
        let removed = self.ingredients.remove(ingredient);
        self.input.refresh(&self.ingredients);
        removed
    }

    /// Empty the working set and discard the recipe and error
    pub fn clear_all(&mut self) {
        self.ingredients.clear();
        self.recipe = None;
        self.error = None;
        self.input.refresh(&self.ingredients);
    }

    /// Replace the input buffer
    pub fn type_text(&mut self, text: &str) {
        self.input.set_buffer(text, &self.ingredients);
    }

    pub fn focus_input(&mut self) {
        self.input.focus(&self.ingredients);
    }

    pub fn press(&mut self, key: Key) {
        let added = self.input.handle_key(key, &self.ingredients);
        self.add_all(added);
    }

    /// Commit the suggestion at `index`
    pub fn choose_suggestion(&mut self, index: usize) {
        let added = self.input.choose(index, &self.ingredients);
        self.add_all(added);
    }

    /// Move into the loading state and return the ingredients to send.
    ///
    /// Returns `None` while a request is outstanding or when the working set
    /// is empty; the latter also sets an error.
    pub fn begin_generation(&mut self) -> Option<Vec<String>> {
        if self.loading {
            return None;
        }
        if self.ingredients.is_empty() {
            self.error = Some(EMPTY_SET_ERROR.to_string());
            return None;
        }

        self.loading = true;
        self.error = None;
        self.recipe = None;
        Some(self.ingredients.as_slice().to_vec())
    }

    /// Leave the loading state with the outcome of a request
    pub fn finish_generation(&mut self, outcome: Result<Recipe, ClientError>) {
        self.loading = false;
        match outcome {
            Ok(recipe) => {
                info!(title = %recipe.title, "Recipe received");
                self.recipe = Some(recipe);
            }
            Err(e) => {
                warn!("Recipe request failed: {}", e);
                let message = e.to_string();
                self.error = Some(if message.is_empty() {
                    GENERIC_FAILURE.to_string()
                } else {
                    message
                });
            }
        }
    }

    /// Request a recipe for the current working set
    pub async fn generate(&mut self) {
        let Some(ingredients) = self.begin_generation() else {
            return;
        };
        debug!(count = ingredients.len(), "Requesting recipe");
        let outcome = self.generator.generate(&ingredients).await;
        self.finish_generation(outcome);
    }

    /// Snapshot of everything a front-end displays
    pub fn view(&self) -> View {
        View::build(
            &self.ingredients,
            &self.input,
            self.recipe.as_ref(),
            self.loading,
            self.error.as_deref(),
        )
    }
}
