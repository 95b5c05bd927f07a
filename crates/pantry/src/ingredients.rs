//! The ingredient working set

/// Trimmed, lowercased form of an ingredient
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Result of committing typed text
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Entry {
    /// Normalized ingredients not yet in the working set
    pub tokens: Vec<String>,

    /// Whether the input buffer should be cleared
    pub clears_buffer: bool,
}

/// Split committed text into the ingredients it adds.
///
/// Text with a comma is split into segments and always clears the buffer,
/// even when every segment is a duplicate. Text without a comma clears the
/// buffer only when it adds something.
pub fn parse_entry(raw: &str, existing: &IngredientList) -> Entry {
    if raw.contains(',') {
        let mut tokens: Vec<String> = Vec::new();
        for token in raw.split(',').map(normalize) {
            if !token.is_empty() && !existing.contains(&token) && !tokens.contains(&token) {
                tokens.push(token);
            }
        }
        return Entry {
            tokens,
            clears_buffer: true,
        };
    }

    let token = normalize(raw);
    if token.is_empty() || existing.contains(&token) {
        return Entry::default();
    }

    Entry {
        tokens: vec![token],
        clears_buffer: true,
    }
}

/// Ordered set of unique, normalized ingredients
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientList {
    items: Vec<String>,
}

impl IngredientList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an ingredient. Returns false for blanks and duplicates.
    pub fn add(&mut self, raw: &str) -> bool {
        let ingredient = normalize(raw);
        if ingredient.is_empty() || self.contains(&ingredient) {
            return false;
        }
        self.items.push(ingredient);
        true
    }

    /// Remove an exact match
    pub fn remove(&mut self, ingredient: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item != ingredient);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn contains(&self, ingredient: &str) -> bool {
        self.items.iter().any(|item| item == ingredient)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
