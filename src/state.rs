// ABOUTME: Single application state object and the pure action fold over it
// ABOUTME: Tracks selection, suggestion panel, recipe and related panels as tagged states
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Application State
//!
//! [`AppState::apply`] is the only way state changes. It never performs I/O; any
//! network work it needs comes back as an [`Effect`] for the controller to run,
//! and the result is folded in through a completion [`Action`].

use picker_core::models::{Recipe, SimilarRecipe};
use tracing::debug;

use crate::actions::{Action, Effect};
use crate::imagery::{hero_image, HeroImagePolicy};
use crate::selection::{SelectionSet, SelectionView};
use crate::suggestions::SuggestionQuery;

/// Lifecycle of a panel backed by a network request
#[derive(Debug, Clone, PartialEq)]
pub enum PanelState<T> {
    /// Nothing shown
    Hidden,
    /// Request in flight
    Loading,
    /// Request succeeded
    Ready(T),
    /// Request failed; carries the reason shown to the user
    Failed(String),
}

impl<T> Default for PanelState<T> {
    fn default() -> Self {
        Self::Hidden
    }
}

impl<T> PanelState<T> {
    /// Short state name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hidden => "idle",
            Self::Loading => "loading",
            Self::Ready(_) => "success",
            Self::Failed(_) => "error",
        }
    }

    /// Whether the panel is hidden
    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        matches!(self, Self::Hidden)
    }

    /// Whether a request is in flight
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Loaded value, if any
    #[must_use]
    pub const fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// Failure reason, if any
    #[must_use]
    pub fn failure(&self) -> Option<&str> {
        match self {
            Self::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}

/// A generated recipe together with the hero image chosen for it
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeDisplay {
    /// Recipe as returned by the backend
    pub recipe: Recipe,
    /// Hero image asset path
    pub hero_image: &'static str,
}

/// Everything the picker shows
#[derive(Debug, Clone, Default)]
pub struct AppState {
    selection: SelectionSet,
    input: String,
    suggestions: Vec<String>,
    suggestions_visible: bool,
    recipe: PanelState<RecipeDisplay>,
    related: PanelState<Vec<SimilarRecipe>>,
    generate_busy: bool,
    scroll_to_recipe: bool,
    hero_policy: HeroImagePolicy,
}

impl AppState {
    /// Empty state using `hero_policy` for recipe hero images
    #[must_use]
    pub fn new(hero_policy: HeroImagePolicy) -> Self {
        Self {
            hero_policy,
            ..Self::default()
        }
    }

    /// Current selection
    #[must_use]
    pub const fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Projection of the selection for rendering
    #[must_use]
    pub fn selection_view(&self) -> SelectionView {
        SelectionView::from(&self.selection)
    }

    /// Current ingredient input text
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Suggestions currently listed
    #[must_use]
    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// Whether the suggestion panel is shown
    #[must_use]
    pub const fn suggestions_visible(&self) -> bool {
        self.suggestions_visible
    }

    /// Main recipe panel
    #[must_use]
    pub const fn recipe_panel(&self) -> &PanelState<RecipeDisplay> {
        &self.recipe
    }

    /// Related recipes gallery
    #[must_use]
    pub const fn related_panel(&self) -> &PanelState<Vec<SimilarRecipe>> {
        &self.related
    }

    /// Whether the generate button shows its busy label
    #[must_use]
    pub const fn generate_busy(&self) -> bool {
        self.generate_busy
    }

    /// Whether the recipe panel should be scrolled into view
    #[must_use]
    pub const fn scroll_to_recipe(&self) -> bool {
        self.scroll_to_recipe
    }

    /// Hero image policy in effect
    #[must_use]
    pub const fn hero_policy(&self) -> HeroImagePolicy {
        self.hero_policy
    }

    /// Fold `action` into the state, returning the effect it requires
    pub fn apply(&mut self, action: Action) -> Option<Effect> {
        match action {
            Action::QueryChanged(text) => {
                self.input = text;
                let query = SuggestionQuery::parse(&self.input);
                if query.is_none() {
                    self.hide_suggestions();
                }
                query.map(Effect::FetchSuggestions)
            }
            Action::SuggestionsLoaded(items) => {
                self.suggestions_visible = !items.is_empty();
                self.suggestions = items;
                None
            }
            Action::DismissSuggestions => {
                self.hide_suggestions();
                None
            }
            Action::AddIngredient(name) => {
                self.selection.add(&name);
                self.input.clear();
                self.hide_suggestions();
                None
            }
            Action::SubmitInput => {
                let text = std::mem::take(&mut self.input);
                self.selection.add(&text);
                self.hide_suggestions();
                None
            }
            Action::RemoveIngredient(name) => {
                self.selection.remove(&name);
                None
            }
            Action::Clear => {
                self.selection.clear();
                self.hide_panels();
                None
            }
            Action::Generate => self.start_generation(),
            Action::RecipeLoaded {
                ingredients,
                result,
            } => {
                self.generate_busy = false;
                match result {
                    Ok(recipe) => {
                        let hero_image = hero_image(&recipe, self.hero_policy);
                        self.recipe = PanelState::Ready(RecipeDisplay { recipe, hero_image });
                        self.related = PanelState::Loading;
                        Some(Effect::FetchSimilar(ingredients))
                    }
                    Err(error) => {
                        self.recipe = PanelState::Failed(error.user_message());
                        None
                    }
                }
            }
            Action::SimilarLoaded(result) => {
                self.related = match result {
                    Ok(recipes) => PanelState::Ready(recipes),
                    Err(error) => PanelState::Failed(error.user_message()),
                };
                None
            }
            Action::SelectRelated(index) => self.select_related(index),
        }
    }

    fn hide_suggestions(&mut self) {
        self.suggestions.clear();
        self.suggestions_visible = false;
    }

    fn start_generation(&mut self) -> Option<Effect> {
        if self.selection.is_empty() {
            debug!("Generate requested with an empty selection, ignoring");
            return None;
        }
        self.recipe = PanelState::Loading;
        self.related = PanelState::Hidden;
        self.generate_busy = true;
        self.scroll_to_recipe = true;
        Some(Effect::GenerateRecipe(self.selection.to_payload()))
    }

    fn select_related(&mut self, index: usize) -> Option<Effect> {
        let Some(card) = self.related.ready().and_then(|recipes| recipes.get(index)) else {
            debug!(index, "No related recipe at this index, ignoring");
            return None;
        };
        if let Some(matching) = card.matching_ingredients.clone() {
            self.selection.replace_with(matching);
        }
        if self.selection.is_empty() {
            debug!(index, "Related recipe has no matching ingredients, clearing panels");
            self.hide_panels();
            return None;
        }
        self.start_generation()
    }

    fn hide_panels(&mut self) {
        self.recipe = PanelState::Hidden;
        self.related = PanelState::Hidden;
        self.scroll_to_recipe = false;
    }
}
