// ABOUTME: Recipe backend API client for suggestions, recipe generation, and similar recipes
// ABOUTME: Classifies transport, status, decode, and explicit error-payload failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recipe Backend API Client
//!
//! The backend is an opaque collaborator exposing three endpoints:
//! - `GET /api/ingredients?query=<text>` returning a JSON array of names
//! - `POST /api/generate-recipe` returning a recipe object or `{error}`
//! - `POST /api/similar-recipes` returning `{recipes: [...]}` or `{error}`
//!
//! Every call issues exactly one request. There are no retries and no caching; the
//! transport timeout is the only timeout.
//!
//! # Example
//! ```rust,no_run
//! use recipe_picker::external::{HttpRecipeApi, RecipeApi, RecipeApiConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let api = HttpRecipeApi::new(RecipeApiConfig::default())?;
//! let recipe = api.generate_recipe(&["Garlic".to_owned()]).await?;
//! println!("{}", recipe.title);
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use async_trait::async_trait;
use picker_core::constants::{defaults, endpoints};
use picker_core::errors::{ApiError, AppError, AppResult};
use picker_core::models::{
    error_message, ApiReply, IngredientsRequest, Recipe, SimilarRecipe, SimilarRecipesResponse,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

/// Longest slice of a non-JSON error body kept as the failure reason
const MAX_REASON_CHARS: usize = 200;

/// Recipe backend client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeApiConfig {
    /// Base URL the endpoint paths are appended to
    pub base_url: String,
    /// Transport timeout applied to every request
    pub timeout: Duration,
}

impl Default for RecipeApiConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::API_BASE_URL.to_owned(),
            timeout: Duration::from_secs(defaults::API_TIMEOUT_SECS),
        }
    }
}

/// Operations the client needs from the recipe backend
#[async_trait]
pub trait RecipeApi: Send + Sync {
    /// Ingredient names matching a partial query
    async fn ingredient_suggestions(&self, query: &str) -> AppResult<Vec<String>>;

    /// Generate a recipe from the given ingredients
    async fn generate_recipe(&self, ingredients: &[String]) -> AppResult<Recipe>;

    /// Recipe ideas that use some of the given ingredients
    async fn similar_recipes(&self, ingredients: &[String]) -> AppResult<Vec<SimilarRecipe>>;
}

/// `reqwest`-backed implementation of [`RecipeApi`]
pub struct HttpRecipeApi {
    config: RecipeApiConfig,
    http_client: reqwest::Client,
}

impl HttpRecipeApi {
    /// Create a new client
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    pub fn new(config: RecipeApiConfig) -> AppResult<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            config,
            http_client,
        })
    }

    /// Configuration this client was built with
    #[must_use]
    pub const fn config(&self) -> &RecipeApiConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url.trim_end_matches('/'))
    }

    async fn post_ingredients<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        ingredients: &[String],
    ) -> Result<T, ApiError> {
        debug!(endpoint, count = ingredients.len(), "POST to recipe backend");
        let response = self
            .http_client
            .post(self.url(endpoint))
            .json(&IngredientsRequest::new(ingredients.to_vec()))
            .send()
            .await
            .map_err(|e| ApiError::transport(endpoint, e.to_string()))?;
        decode_reply(endpoint, response).await
    }
}

#[async_trait]
impl RecipeApi for HttpRecipeApi {
    async fn ingredient_suggestions(&self, query: &str) -> AppResult<Vec<String>> {
        let endpoint = endpoints::INGREDIENTS;
        debug!(endpoint, query, "GET from recipe backend");
        let response = self
            .http_client
            .get(self.url(endpoint))
            .query(&[(endpoints::QUERY_PARAM, query)])
            .send()
            .await
            .map_err(|e| ApiError::transport(endpoint, e.to_string()))?;
        Ok(decode_reply(endpoint, response).await?)
    }

    async fn generate_recipe(&self, ingredients: &[String]) -> AppResult<Recipe> {
        Ok(self
            .post_ingredients(endpoints::GENERATE_RECIPE, ingredients)
            .await?)
    }

    async fn similar_recipes(&self, ingredients: &[String]) -> AppResult<Vec<SimilarRecipe>> {
        let body: SimilarRecipesResponse = self
            .post_ingredients(endpoints::SIMILAR_RECIPES, ingredients)
            .await?;
        Ok(body.recipes)
    }
}

/// Turn a response into `T`, classifying every failure kind
async fn decode_reply<T: DeserializeOwned>(
    endpoint: &str,
    response: reqwest::Response,
) -> Result<T, ApiError> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::transport(endpoint, e.to_string()))?;

    if !status.is_success() {
        return Err(ApiError::status(
            endpoint,
            status.as_u16(),
            failure_reason(&text),
        ));
    }

    let value: Value = serde_json::from_str(&text)
        .map_err(|e| ApiError::decode(endpoint, format!("body is not valid JSON: {e}")))?;

    match ApiReply::<T>::decode(value) {
        Ok(ApiReply::Success(body)) => Ok(body),
        Ok(ApiReply::Failure(message)) => Err(ApiError::application(endpoint, message)),
        Err(e) => Err(ApiError::decode(endpoint, e.to_string())),
    }
}

/// Reason for a non-2xx response: the `error` member when JSON, else the trimmed text
fn failure_reason(body: &str) -> Option<String> {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        if let Some(message) = error_message(&value) {
            return Some(message);
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.chars().take(MAX_REASON_CHARS).collect())
    }
}
