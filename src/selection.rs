// ABOUTME: Ingredient selection set and its pure view projection
// ABOUTME: Exact-match de-duplication, add/remove/clear/replace, and tag visibility rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Selection Set
//!
//! Membership is by exact, case-sensitive string equality: `"tomato"` and `"Tomato"`
//! are two different entries. Entries are kept in insertion order so tags render
//! stably, but the order carries no meaning.

/// Distinct ingredient names chosen by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    items: Vec<String>,
}

impl SelectionSet {
    /// Create an empty selection
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `name` unless already present
    ///
    /// Returns `false` (and leaves the set untouched) for duplicates and for names
    /// that are empty after trimming.
    pub fn add(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.contains(name) {
            return false;
        }
        self.items.push(name.to_owned());
        true
    }

    /// Remove `name` if present; absent names are a no-op
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item != name);
        self.items.len() != before
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Replace the whole selection with `names`, collapsing duplicates
    pub fn replace_with<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.items.clear();
        for name in names {
            self.add(name.as_ref());
        }
    }

    /// Exact-match membership test
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|item| item == name)
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing is selected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// Request payload for the recipe endpoints
    #[must_use]
    pub fn to_payload(&self) -> Vec<String> {
        self.items.clone()
    }
}

/// A rendered ingredient tag; removing it dispatches `RemoveIngredient(name)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientTag {
    /// Ingredient name the removal affordance is wired to
    pub name: String,
}

/// Pure projection of a [`SelectionSet`] onto the selection panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionView {
    /// Tags in display order
    pub tags: Vec<IngredientTag>,
    /// "No ingredients selected" message is shown
    pub placeholder_visible: bool,
    /// Generate action is enabled
    pub generate_enabled: bool,
    /// Clear-all action is shown
    pub clear_visible: bool,
}

impl From<&SelectionSet> for SelectionView {
    fn from(selection: &SelectionSet) -> Self {
        let has_items = !selection.is_empty();
        Self {
            tags: selection
                .iter()
                .map(|name| IngredientTag {
                    name: name.to_owned(),
                })
                .collect(),
            placeholder_visible: !has_items,
            generate_enabled: has_items,
            clear_visible: has_items,
        }
    }
}

/// Share of the selection a recipe idea uses, as a rounded percentage
///
/// Counts selected names that appear in `matching`. Returns 0 for an empty selection.
#[must_use]
pub fn match_percentage(selection: &SelectionSet, matching: &[String]) -> u8 {
    if selection.is_empty() {
        return 0;
    }
    let used = selection
        .iter()
        .filter(|name| matching.iter().any(|m| m == name))
        .count();
    ((used as f64 / selection.len() as f64) * 100.0).round() as u8
}
