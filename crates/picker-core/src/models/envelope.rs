// ABOUTME: Request and response envelopes for the recipe backend endpoints
// ABOUTME: Separates explicit error payloads from successful bodies before decoding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::recipe::SimilarRecipe;

/// Body of both POST endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientsRequest {
    /// Ingredient names, in selection order
    pub ingredients: Vec<String>,
}

impl IngredientsRequest {
    /// Build a request from an ingredient payload
    #[must_use]
    pub fn new(ingredients: Vec<String>) -> Self {
        Self { ingredients }
    }
}

/// Successful body of `POST /api/similar-recipes`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarRecipesResponse {
    /// Recipe ideas; must be present and must be an array
    pub recipes: Vec<SimilarRecipe>,
}

/// A decoded backend reply: either the expected body or an explicit error
#[derive(Debug, Clone, PartialEq)]
pub enum ApiReply<T> {
    /// Body decoded into the expected shape
    Success(T),
    /// Body carried an `error` field
    Failure(String),
}

impl<T: DeserializeOwned> ApiReply<T> {
    /// Decode a JSON body, checking for an explicit `error` field first
    ///
    /// A JSON object with a non-null `error` member is a failure regardless of what
    /// else it contains.
    ///
    /// # Errors
    ///
    /// Returns the decoder error when the body is neither an error payload nor a
    /// valid `T`.
    pub fn decode(value: Value) -> Result<Self, serde_json::Error> {
        if let Some(message) = error_message(&value) {
            return Ok(Self::Failure(message));
        }
        serde_json::from_value(value).map(Self::Success)
    }
}

/// Extract the `error` member of a JSON object, if any
#[must_use]
pub fn error_message(value: &Value) -> Option<String> {
    match value.get("error")? {
        Value::Null => None,
        Value::String(message) => Some(message.clone()),
        other => Some(other.to_string()),
    }
}
