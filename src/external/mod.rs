// ABOUTME: External API client modules (recipe backend)
// ABOUTME: Provides the RecipeApi seam and its reqwest implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! External API Clients
//!
//! This module contains the client for the recipe backend the picker consumes.

pub mod recipe_api;

// Re-export commonly used types
pub use recipe_api::{HttpRecipeApi, RecipeApi, RecipeApiConfig};
