// ABOUTME: Recipe payload models exchanged with the recipe backend
// ABOUTME: Recipe, SimilarRecipe, Servings, and request/response envelopes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Core data models
//!
//! The client treats recipes as opaque structured values produced by the backend:
//! it decodes and renders them, it never edits them.

/// Recipe and similar-recipe models
pub mod recipe;

/// Request and response envelopes for the backend endpoints
pub mod envelope;

pub use envelope::{error_message, ApiReply, IngredientsRequest, SimilarRecipesResponse};
pub use recipe::{Recipe, Servings, SimilarRecipe};
