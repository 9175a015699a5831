// ABOUTME: Recipe models rendered by the client
// ABOUTME: Defines Recipe, SimilarRecipe, and the number-or-text Servings value
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Serving count as sent by the backend: a number, or free text such as `"4-6"`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Servings {
    /// Whole number of servings
    Count(u32),
    /// Fractional serving count
    Amount(f64),
    /// Free-form text
    Text(String),
}

impl fmt::Display for Servings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(count) => write!(f, "{count}"),
            Self::Amount(amount) => write!(f, "{amount}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// Generated recipe returned by `POST /api/generate-recipe`
///
/// Only the title is required; the remaining fields default to empty so a sparse
/// reply still renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Recipe name
    pub title: String,
    /// Short description of the dish
    #[serde(default)]
    pub description: String,
    /// Cook time as text (e.g. "30 minutes")
    #[serde(default)]
    pub cook_time: String,
    /// Number of servings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<Servings>,
    /// Difficulty label (e.g. "Easy", "Medium", "Hard")
    #[serde(default)]
    pub difficulty: String,
    /// Ingredient lines, in order
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Instruction steps, in order
    #[serde(default)]
    pub instructions: Vec<String>,
}

/// Recipe idea returned by `POST /api/similar-recipes`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarRecipe {
    /// Recipe name
    pub title: String,
    /// Short description
    #[serde(default)]
    pub description: String,
    /// Cook time as text
    #[serde(default)]
    pub cook_time: String,
    /// Difficulty label
    #[serde(default)]
    pub difficulty: String,
    /// Number of servings, when the backend includes it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<Servings>,
    /// Subset of the queried ingredients this idea uses; absent means "no list"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matching_ingredients: Option<Vec<String>>,
}

impl SimilarRecipe {
    /// Matching ingredients, or an empty slice when the backend sent none
    #[must_use]
    pub fn matching(&self) -> &[String] {
        self.matching_ingredients.as_deref().unwrap_or_default()
    }
}
