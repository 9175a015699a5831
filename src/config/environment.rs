// ABOUTME: Environment configuration for the recipe backend, suggestion source, and imagery
// ABOUTME: Parses and validates RECIPE_* variables with CLI-override helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based client configuration

use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use picker_core::constants::{defaults, env_config};
use picker_core::errors::{AppError, AppResult};
use tracing::debug;
use url::Url;

use crate::catalog::IngredientCatalog;
use crate::external::RecipeApiConfig;
use crate::imagery::HeroImagePolicy;
use crate::suggestions::SuggestionSource;

/// Complete client configuration
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClientConfig {
    /// Recipe backend connection settings
    pub api: RecipeApiConfig,
    /// Where autocomplete suggestions come from
    pub suggestion_source: SuggestionSource,
    /// JSON catalog file for local suggestions (built-in list when unset)
    pub catalog_path: Option<PathBuf>,
    /// How the main recipe hero image is chosen
    pub hero_policy: HeroImagePolicy,
}

impl ClientConfig {
    /// Load configuration from process environment variables
    ///
    /// # Errors
    ///
    /// Returns a `ConfigInvalid` error when a variable is set to an unusable value
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// Unset and blank variables take their defaults.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigInvalid` error when a variable is set to an unusable value
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let base_url = var(env_config::API_BASE_URL)
            .map(|raw| validate_base_url(&raw))
            .transpose()?
            .unwrap_or_else(|| defaults::API_BASE_URL.to_owned());

        let timeout_secs = var(env_config::API_TIMEOUT_SECS)
            .map(|raw| parse_timeout_secs(&raw))
            .transpose()?
            .unwrap_or(defaults::API_TIMEOUT_SECS);

        let suggestion_source: SuggestionSource = var(env_config::SUGGESTION_SOURCE)
            .map(|raw| raw.parse())
            .transpose()?
            .unwrap_or_default();

        let hero_policy: HeroImagePolicy = var(env_config::HERO_IMAGE_POLICY)
            .map(|raw| raw.parse())
            .transpose()?
            .unwrap_or_default();

        let config = Self {
            api: RecipeApiConfig {
                base_url,
                timeout: Duration::from_secs(timeout_secs),
            },
            suggestion_source,
            catalog_path: var(env_config::CATALOG_PATH).map(PathBuf::from),
            hero_policy,
        };
        debug!("{}", config.summary());
        Ok(config)
    }

    /// Override the backend base URL
    ///
    /// # Errors
    ///
    /// Returns a `ConfigInvalid` error if `raw` is not an absolute http(s) URL
    pub fn with_base_url(mut self, raw: &str) -> AppResult<Self> {
        self.api.base_url = validate_base_url(raw)?;
        Ok(self)
    }

    /// Switch to local suggestions, optionally from a catalog file
    #[must_use]
    pub fn with_local_catalog(mut self, catalog_path: Option<&Path>) -> Self {
        self.suggestion_source = SuggestionSource::Local;
        if let Some(path) = catalog_path {
            self.catalog_path = Some(path.to_path_buf());
        }
        self
    }

    /// Override the hero image policy
    #[must_use]
    pub const fn with_hero_policy(mut self, hero_policy: HeroImagePolicy) -> Self {
        self.hero_policy = hero_policy;
        self
    }

    /// Catalog for local suggestions: the configured file, or the built-in list
    ///
    /// # Errors
    ///
    /// Returns an error if the configured file cannot be read or parsed
    pub fn load_catalog(&self) -> AppResult<IngredientCatalog> {
        self.catalog_path.as_deref().map_or_else(
            || Ok(IngredientCatalog::builtin()),
            IngredientCatalog::from_json_file,
        )
    }

    /// One-line summary for logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "backend={} timeout={}s suggestions={} catalog={} hero_policy={}",
            self.api.base_url,
            self.api.timeout.as_secs(),
            self.suggestion_source,
            self.catalog_path
                .as_deref()
                .map_or_else(|| "builtin".to_owned(), |p| p.display().to_string()),
            self.hero_policy
        )
    }
}

/// Accept only absolute http(s) URLs; the trailing slash is dropped
fn validate_base_url(raw: &str) -> AppResult<String> {
    let trimmed = raw.trim();
    let url = Url::parse(trimmed).map_err(|e| {
        AppError::config_invalid(format!(
            "{} must be an absolute URL, got '{trimmed}': {e}",
            env_config::API_BASE_URL
        ))
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(AppError::config_invalid(format!(
            "{} must use http or https, got scheme '{}'",
            env_config::API_BASE_URL,
            url.scheme()
        )));
    }
    Ok(trimmed.trim_end_matches('/').to_owned())
}

fn parse_timeout_secs(raw: &str) -> AppResult<u64> {
    match raw.trim().parse::<u64>() {
        Ok(0) | Err(_) => Err(AppError::config_invalid(format!(
            "{} must be a positive number of seconds, got '{raw}'",
            env_config::API_TIMEOUT_SECS
        ))),
        Ok(secs) => Ok(secs),
    }
}
