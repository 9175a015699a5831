// ABOUTME: Discrete user and completion actions folded over the application state
// ABOUTME: Defines Action inputs and the Effect outputs the controller executes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use picker_core::errors::AppResult;
use picker_core::models::{Recipe, SimilarRecipe};

use crate::suggestions::SuggestionQuery;

/// Everything that can happen to the picker
#[derive(Debug)]
pub enum Action {
    /// Ingredient input text changed
    QueryChanged(String),
    /// Suggestion lookup finished
    SuggestionsLoaded(Vec<String>),
    /// Suggestion panel closed without a pick (click outside, escape)
    DismissSuggestions,
    /// Ingredient picked from the suggestion panel
    AddIngredient(String),
    /// Current input text submitted as a free-form ingredient
    SubmitInput,
    /// Tag removal clicked
    RemoveIngredient(String),
    /// Clear-all clicked
    Clear,
    /// Generate clicked
    Generate,
    /// Recipe request finished
    RecipeLoaded {
        /// Payload the request was issued with
        ingredients: Vec<String>,
        /// Outcome of the request
        result: AppResult<Recipe>,
    },
    /// Similar-recipes request finished
    SimilarLoaded(AppResult<Vec<SimilarRecipe>>),
    /// "Make this recipe" clicked on the related card at this index
    SelectRelated(usize),
}

impl Action {
    /// Short name for logs
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::QueryChanged(_) => "query_changed",
            Self::SuggestionsLoaded(_) => "suggestions_loaded",
            Self::DismissSuggestions => "dismiss_suggestions",
            Self::AddIngredient(_) => "add_ingredient",
            Self::SubmitInput => "submit_input",
            Self::RemoveIngredient(_) => "remove_ingredient",
            Self::Clear => "clear",
            Self::Generate => "generate",
            Self::RecipeLoaded { .. } => "recipe_loaded",
            Self::SimilarLoaded(_) => "similar_loaded",
            Self::SelectRelated(_) => "select_related",
        }
    }
}

/// Work the controller performs on behalf of the state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Look up suggestions for a normalized query
    FetchSuggestions(SuggestionQuery),
    /// Request a recipe for this payload
    GenerateRecipe(Vec<String>),
    /// Request similar recipes for this payload
    FetchSimilar(Vec<String>),
}
