//! Typed ingredient entry with suggestions and keyboard navigation

use crate::dictionary;
use crate::ingredients::{parse_entry, IngredientList};

/// Input placeholder text
pub const PLACEHOLDER: &str = "Type ingredients (comma-separated)...";

/// Keys the input reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Up,
    Down,
    Escape,
}

/// Input buffer plus the suggestion list derived from it
#[derive(Debug, Clone, Default)]
pub struct IngredientInput {
    buffer: String,
    suggestions: Vec<&'static str>,
    selected: Option<usize>,
}

impl IngredientInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Suggestions currently shown
    pub fn suggestions(&self) -> &[&'static str] {
        &self.suggestions
    }

    /// Index of the highlighted suggestion, if any
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Replace the buffer contents
    pub fn set_buffer(&mut self, text: impl Into<String>, existing: &IngredientList) {
        self.buffer = text.into();
        self.refresh(existing);
    }

    /// Recompute suggestions for the current buffer and working set.
    ///
    /// Always drops the highlighted suggestion.
    pub fn refresh(&mut self, existing: &IngredientList) {
        self.selected = None;
        if self.buffer.trim().is_empty() {
            self.suggestions.clear();
        } else {
            self.suggestions = dictionary::suggest(&self.buffer, existing.as_slice());
        }
    }

    /// Re-open suggestions when focus returns to a non-empty input
    pub fn focus(&mut self, existing: &IngredientList) {
        if !self.buffer.is_empty() {
            self.refresh(existing);
        }
    }

    /// Handle a key press, returning ingredients to add
    pub fn handle_key(&mut self, key: Key, existing: &IngredientList) -> Vec<String> {
        match key {
            Key::Enter => {
                if let Some(choice) = self.selected.and_then(|i| self.suggestions.get(i).copied()) {
                    self.commit(choice, existing)
                } else if !self.buffer.trim().is_empty() {
                    let text = self.buffer.clone();
                    self.commit(&text, existing)
                } else {
                    Vec::new()
                }
            }
            Key::Down => {
                let last = self.suggestions.len().checked_sub(1);
                self.selected = match (self.selected, last) {
                    (None, Some(_)) => Some(0),
                    (Some(i), Some(last)) if i < last => Some(i + 1),
                    (current, _) => current,
                };
                Vec::new()
            }
            Key::Up => {
                self.selected = match self.selected {
                    Some(i) if i > 0 => Some(i - 1),
                    _ => None,
                };
                Vec::new()
            }
            Key::Escape => {
                self.suggestions.clear();
                self.selected = None;
                Vec::new()
            }
        }
    }

    /// Commit the suggestion at `index`, as if it had been clicked
    pub fn choose(&mut self, index: usize, existing: &IngredientList) -> Vec<String> {
        match self.suggestions.get(index).copied() {
            Some(choice) => self.commit(choice, existing),
            None => Vec::new(),
        }
    }

    fn commit(&mut self, text: &str, existing: &IngredientList) -> Vec<String> {
        let entry = parse_entry(text, existing);
        if entry.clears_buffer {
            self.buffer.clear();
            self.suggestions.clear();
            self.selected = None;
        }
        entry.tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str, existing: &IngredientList) -> IngredientInput {
        let mut input = IngredientInput::new();
        input.set_buffer(text, existing);
        input
    }

    #[test]
    fn test_suggestions_follow_buffer() {
        let existing = IngredientList::new();
        let mut input = typed("chi", &existing);
        assert_eq!(input.suggestions()[0], "chicken breast");

        input.set_buffer("   ", &existing);
        assert!(input.suggestions().is_empty());
    }

    #[test]
    fn test_untrimmed_buffer_is_matched_as_typed() {
        let existing = IngredientList::new();
        let input = typed("rice ", &existing);
        assert!(input.suggestions().is_empty());

        let input = typed("brown ", &existing);
        assert_eq!(input.suggestions(), ["brown rice", "brown sugar"]);
    }

    #[test]
    fn test_down_up_navigation_is_bounded() {
        let existing = IngredientList::new();
        let mut input = typed("brown", &existing);
        assert_eq!(input.suggestions().len(), 2);

        input.handle_key(Key::Up, &existing);
        assert_eq!(input.selected(), None);

        input.handle_key(Key::Down, &existing);
        assert_eq!(input.selected(), Some(0));
        input.handle_key(Key::Down, &existing);
        input.handle_key(Key::Down, &existing);
        assert_eq!(input.selected(), Some(1));

        input.handle_key(Key::Up, &existing);
        input.handle_key(Key::Up, &existing);
        assert_eq!(input.selected(), None);
    }

    #[test]
    fn test_down_without_suggestions() {
        let existing = IngredientList::new();
        let mut input = typed("xyz", &existing);
        input.handle_key(Key::Down, &existing);
        assert_eq!(input.selected(), None);
    }

    #[test]
    fn test_enter_commits_selected_suggestion() {
        let existing = IngredientList::new();
        let mut input = typed("chi", &existing);
        input.handle_key(Key::Down, &existing);

        let added = input.handle_key(Key::Enter, &existing);
        assert_eq!(added, vec!["chicken breast"]);
        assert_eq!(input.buffer(), "");
        assert!(input.suggestions().is_empty());
    }

    #[test]
    fn test_enter_commits_buffer_without_selection() {
        let existing = IngredientList::new();
        let mut input = typed("Custom Ingredient", &existing);
        let added = input.handle_key(Key::Enter, &existing);
        assert_eq!(added, vec!["custom ingredient"]);
        assert_eq!(input.buffer(), "");
    }

    #[test]
    fn test_enter_on_blank_buffer_does_nothing() {
        let existing = IngredientList::new();
        let mut input = typed("  ", &existing);
        assert!(input.handle_key(Key::Enter, &existing).is_empty());
        assert_eq!(input.buffer(), "  ");
    }

    #[test]
    fn test_duplicate_single_entry_keeps_buffer() {
        let mut existing = IngredientList::new();
        existing.add("rice");
        let mut input = typed("Rice", &existing);
        assert!(input.handle_key(Key::Enter, &existing).is_empty());
        assert_eq!(input.buffer(), "Rice");
    }

    #[test]
    fn test_comma_entry_always_clears_buffer() {
        let mut existing = IngredientList::new();
        existing.add("rice");
        let mut input = typed("rice, ", &existing);
        assert!(input.handle_key(Key::Enter, &existing).is_empty());
        assert_eq!(input.buffer(), "");
    }

    #[test]
    fn test_escape_hides_suggestions() {
        let existing = IngredientList::new();
        let mut input = typed("chi", &existing);
        input.handle_key(Key::Down, &existing);
        input.handle_key(Key::Escape, &existing);

        assert!(input.suggestions().is_empty());
        assert_eq!(input.selected(), None);
        assert_eq!(input.buffer(), "chi");

        input.focus(&existing);
        assert!(!input.suggestions().is_empty());
    }

    #[test]
    fn test_choose_matches_enter_on_suggestion() {
        let existing = IngredientList::new();
        let mut input = typed("brown", &existing);
        assert_eq!(input.choose(1, &existing), vec!["brown sugar"]);
        assert!(input.choose(5, &existing).is_empty());
    }

    #[test]
    fn test_refresh_drops_selection() {
        let mut existing = IngredientList::new();
        let mut input = typed("chicken", &existing);
        input.handle_key(Key::Down, &existing);

        existing.add("chicken breast");
        input.refresh(&existing);
        assert_eq!(input.selected(), None);
        assert!(!input.suggestions().contains(&"chicken breast"));
    }
}
