// ABOUTME: Controller owning the application state and running network effects
// ABOUTME: Dispatches actions, awaits backend calls, and feeds completions back into the fold
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Controller
//!
//! The controller is the single owner of [`AppState`]. [`RecipeController::dispatch`]
//! takes `&mut self`, so one action chain runs to completion before the next begins:
//! apply the action, run the effect it produced, apply the completion action, and so
//! on until no effect remains. Triggering the pipeline again simply starts a new chain;
//! whichever completion is applied last is what the panels show.

use std::sync::Arc;
use std::time::Instant;

use picker_core::errors::AppResult;
use picker_core::models::{Recipe, SimilarRecipe};
use tracing::{debug, info_span, Instrument};
use uuid::Uuid;

use crate::actions::{Action, Effect};
use crate::config::ClientConfig;
use crate::external::{HttpRecipeApi, RecipeApi};
use crate::imagery::HeroImagePolicy;
use crate::logging::PipelineLogger;
use crate::state::AppState;
use crate::suggestions::{
    LocalSuggestions, RemoteSuggestions, SuggestionProvider, SuggestionSource,
};

const RECIPE_PIPELINE: &str = "generate_recipe";
const RELATED_PIPELINE: &str = "similar_recipes";

/// Owns the state and the collaborators effects run against
pub struct RecipeController {
    state: AppState,
    api: Arc<dyn RecipeApi>,
    suggestions: Box<dyn SuggestionProvider>,
}

impl RecipeController {
    /// Assemble a controller from explicit collaborators
    #[must_use]
    pub fn new(
        api: Arc<dyn RecipeApi>,
        suggestions: Box<dyn SuggestionProvider>,
        hero_policy: HeroImagePolicy,
    ) -> Self {
        Self {
            state: AppState::new(hero_policy),
            api,
            suggestions,
        }
    }

    /// Build the HTTP client and suggestion provider described by `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built or the local catalog
    /// cannot be loaded
    pub fn from_config(config: &ClientConfig) -> AppResult<Self> {
        let api: Arc<dyn RecipeApi> = Arc::new(HttpRecipeApi::new(config.api.clone())?);
        let suggestions: Box<dyn SuggestionProvider> = match config.suggestion_source {
            SuggestionSource::Local => Box::new(LocalSuggestions::new(config.load_catalog()?)),
            SuggestionSource::Remote => Box::new(RemoteSuggestions::new(Arc::clone(&api))),
        };
        Ok(Self::new(api, suggestions, config.hero_policy))
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Apply `action` and every completion it leads to
    pub async fn dispatch(&mut self, action: Action) {
        let mut action = action;
        loop {
            debug!(action = action.name(), "Applying action");
            let Some(effect) = self.state.apply(action) else {
                break;
            };
            action = self.run(effect).await;
        }
    }

    /// Apply a sequence of actions in order
    pub async fn dispatch_all<I>(&mut self, actions: I)
    where
        I: IntoIterator<Item = Action>,
    {
        for action in actions {
            self.dispatch(action).await;
        }
    }

    async fn run(&self, effect: Effect) -> Action {
        match effect {
            Effect::FetchSuggestions(query) => {
                Action::SuggestionsLoaded(self.suggestions.suggest(&query).await)
            }
            Effect::GenerateRecipe(ingredients) => {
                let request_id = Uuid::new_v4();
                let result = self
                    .generate(request_id, &ingredients)
                    .instrument(info_span!("recipe_pipeline", %request_id))
                    .await;
                Action::RecipeLoaded {
                    ingredients,
                    result,
                }
            }
            Effect::FetchSimilar(ingredients) => {
                let request_id = Uuid::new_v4();
                let result = self
                    .similar(request_id, &ingredients)
                    .instrument(info_span!("related_pipeline", %request_id))
                    .await;
                Action::SimilarLoaded(result)
            }
        }
    }

    async fn generate(&self, request_id: Uuid, ingredients: &[String]) -> AppResult<Recipe> {
        PipelineLogger::log_started(RECIPE_PIPELINE, request_id, ingredients.len());
        let started = Instant::now();
        let result = self
            .api
            .generate_recipe(ingredients)
            .await
            .map_err(|e| e.with_request_id(request_id));
        let elapsed = elapsed_ms(started);
        match &result {
            Ok(recipe) => {
                PipelineLogger::log_succeeded(RECIPE_PIPELINE, request_id, elapsed, &recipe.title);
            }
            Err(error) => PipelineLogger::log_failed(RECIPE_PIPELINE, request_id, elapsed, error),
        }
        result
    }

    async fn similar(
        &self,
        request_id: Uuid,
        ingredients: &[String],
    ) -> AppResult<Vec<SimilarRecipe>> {
        PipelineLogger::log_started(RELATED_PIPELINE, request_id, ingredients.len());
        let started = Instant::now();
        let result = self
            .api
            .similar_recipes(ingredients)
            .await
            .map_err(|e| e.with_request_id(request_id));
        let elapsed = elapsed_ms(started);
        match &result {
            Ok(recipes) => PipelineLogger::log_succeeded(
                RELATED_PIPELINE,
                request_id,
                elapsed,
                &format!("{} recipes", recipes.len()),
            ),
            Err(error) => PipelineLogger::log_failed(RELATED_PIPELINE, request_id, elapsed, error),
        }
        result
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
