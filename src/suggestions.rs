// ABOUTME: Autocomplete suggestion providers backed by the local catalog or the backend
// ABOUTME: Normalizes queries and swallows remote failures into empty suggestion lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Suggestion Provider
//!
//! Queries are trimmed and lowercased before they reach a provider. Anything shorter
//! than two characters never reaches one: [`SuggestionQuery::parse`] returns `None`
//! and the caller hides the suggestion panel instead.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use picker_core::constants::suggestions::MIN_QUERY_CHARS;
use picker_core::errors::AppError;
use tracing::{debug, warn};

use crate::catalog::IngredientCatalog;
use crate::external::RecipeApi;

/// A normalized query long enough to look up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionQuery(String);

impl SuggestionQuery {
    /// Trim and lowercase raw input; `None` when shorter than the minimum length
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_lowercase();
        if normalized.chars().count() < MIN_QUERY_CHARS {
            return None;
        }
        Some(Self(normalized))
    }

    /// Normalized query text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SuggestionQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Source of autocomplete candidates
#[async_trait]
pub trait SuggestionProvider: Send + Sync {
    /// Candidate ingredient names for `query`; never fails, yields empty on error
    async fn suggest(&self, query: &SuggestionQuery) -> Vec<String>;
}

/// Substring filter over an in-memory catalog
pub struct LocalSuggestions {
    catalog: IngredientCatalog,
}

impl LocalSuggestions {
    /// Wrap a catalog
    #[must_use]
    pub const fn new(catalog: IngredientCatalog) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl SuggestionProvider for LocalSuggestions {
    async fn suggest(&self, query: &SuggestionQuery) -> Vec<String> {
        let matches: Vec<String> = self
            .catalog
            .filter(query.as_str())
            .map(str::to_owned)
            .collect();
        debug!(query = %query, matches = matches.len(), "Local suggestion lookup");
        matches
    }
}

/// Suggestions fetched from the backend's ingredient endpoint
pub struct RemoteSuggestions {
    api: Arc<dyn RecipeApi>,
}

impl RemoteSuggestions {
    /// Wrap a backend client
    #[must_use]
    pub fn new(api: Arc<dyn RecipeApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl SuggestionProvider for RemoteSuggestions {
    async fn suggest(&self, query: &SuggestionQuery) -> Vec<String> {
        match self.api.ingredient_suggestions(query.as_str()).await {
            Ok(matches) => {
                debug!(query = %query, matches = matches.len(), "Remote suggestion lookup");
                matches
            }
            Err(error) => {
                warn!(
                    query = %query,
                    error.code = ?error.code,
                    error.message = %error.message,
                    "Suggestion lookup failed, hiding suggestions"
                );
                Vec::new()
            }
        }
    }
}

/// Where suggestions come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SuggestionSource {
    /// Built-in or file-backed catalog
    Local,
    /// Backend ingredient endpoint
    #[default]
    Remote,
}

impl SuggestionSource {
    /// Configuration value for this source
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Remote => "remote",
        }
    }
}

impl fmt::Display for SuggestionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SuggestionSource {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "local" | "catalog" => Ok(Self::Local),
            "remote" | "server" => Ok(Self::Remote),
            other => Err(AppError::config_invalid(format!(
                "unknown suggestion source '{other}' (expected 'local' or 'remote')"
            ))),
        }
    }
}
