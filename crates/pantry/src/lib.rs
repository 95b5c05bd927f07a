//! # Pantry
//!
//! Client side of Fridge Friend: collects ingredients by typing or voice,
//! suggests known ingredients, and asks the recipe broker for a recipe.
//!
//! Front-ends drive a [`Session`] and render its [`View`].

pub mod client;
pub mod dictionary;
pub mod error;
pub mod ingredients;
pub mod input;
pub mod session;
pub mod view;
pub mod voice;

pub use client::HttpRecipeClient;
pub use error::{ClientError, SpeechError};
pub use ingredients::IngredientList;
pub use input::{IngredientInput, Key};
pub use session::{RecipeGenerator, Session};
pub use view::View;
pub use voice::{SpeechEngine, SpeechEvent, VoiceAvailability, VoiceInput};

/// Version of the pantry crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
