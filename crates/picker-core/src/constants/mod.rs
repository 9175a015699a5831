// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Endpoint paths, query limits, defaults, and environment variable names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain rather than kept in a single flat list.

/// Recipe backend endpoint paths
pub mod endpoints {
    /// Ingredient suggestion lookup (GET, `query` parameter)
    pub const INGREDIENTS: &str = "/api/ingredients";
    /// Recipe generation (POST)
    pub const GENERATE_RECIPE: &str = "/api/generate-recipe";
    /// Similar recipe ideas (POST)
    pub const SIMILAR_RECIPES: &str = "/api/similar-recipes";
    /// Query parameter carrying the partial ingredient name
    pub const QUERY_PARAM: &str = "query";
}

/// Suggestion lookup limits
pub mod suggestions {
    /// Minimum trimmed query length (in characters) before any lookup happens
    pub const MIN_QUERY_CHARS: usize = 2;
}

/// Client defaults
pub mod defaults {
    /// Default recipe backend base URL
    pub const API_BASE_URL: &str = "http://127.0.0.1:5000";
    /// Default transport timeout in seconds
    pub const API_TIMEOUT_SECS: u64 = 30;
    /// Entrance animation stagger between gallery cards (milliseconds)
    pub const CARD_ANIMATION_STAGGER_MS: u64 = 100;
    /// Label shown on the generate button while a recipe request is in flight
    pub const GENERATE_BUSY_LABEL: &str = "Generating...";
    /// Label shown on the generate button when idle
    pub const GENERATE_IDLE_LABEL: &str = "Generate Recipe";
}

/// Environment variable names read by the client configuration
pub mod env_config {
    /// Recipe backend base URL
    pub const API_BASE_URL: &str = "RECIPE_API_BASE_URL";
    /// Transport timeout in seconds
    pub const API_TIMEOUT_SECS: &str = "RECIPE_API_TIMEOUT_SECS";
    /// Suggestion source (`local` or `remote`)
    pub const SUGGESTION_SOURCE: &str = "RECIPE_SUGGESTION_SOURCE";
    /// Optional JSON ingredient catalog used in local mode
    pub const CATALOG_PATH: &str = "RECIPE_CATALOG_PATH";
    /// Hero image policy (`default` or `category`)
    pub const HERO_IMAGE_POLICY: &str = "RECIPE_HERO_IMAGE_POLICY";
}

/// Service names for structured logging
pub mod service_names {
    /// Name reported in startup logs
    pub const RECIPE_PICKER: &str = "recipe-picker";
}
