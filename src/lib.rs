// ABOUTME: Main library entry point for the Recipe Picker client
// ABOUTME: Ingredient selection, autocomplete, and AI recipe request pipelines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Recipe Picker
//!
//! Client for an AI recipe backend. Users build a set of ingredients (with
//! autocomplete from a local catalog or the backend), ask the backend for a recipe,
//! and browse related recipe ideas that can themselves be turned into new requests.
//!
//! ## Architecture
//!
//! - **State**: one [`state::AppState`] value holds everything shown on screen
//! - **Actions**: user events and request completions are [`actions::Action`] values
//!   folded into the state by a pure function
//! - **Controller**: [`controller::RecipeController`] owns the state and runs the
//!   network effects the fold asks for
//! - **External**: [`external::RecipeApi`] is the seam to the backend
//! - **Views**: HTML rendering of the state
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use recipe_picker::actions::Action;
//! use recipe_picker::config::ClientConfig;
//! use recipe_picker::controller::RecipeController;
//! use recipe_picker::errors::AppResult;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = ClientConfig::from_env()?;
//!     let mut controller = RecipeController::from_config(&config)?;
//!
//!     controller.dispatch(Action::AddIngredient("Garlic".to_owned())).await;
//!     controller.dispatch(Action::Generate).await;
//!
//!     if let Some(display) = controller.state().recipe_panel().ready() {
//!         println!("{}", display.recipe.title);
//!     }
//!     Ok(())
//! }
//! ```

/// User and completion actions, and the effects they produce
pub mod actions;

/// Built-in and file-backed ingredient catalog
pub mod catalog;

/// Environment-driven configuration
pub mod config;

/// State owner that runs network effects
pub mod controller;

/// Recipe backend client
pub mod external;

/// Hero and thumbnail image selection
pub mod imagery;

/// Structured logging setup
pub mod logging;

/// Ingredient selection set and its view projection
pub mod selection;

/// Application state and the action fold
pub mod state;

/// Autocomplete suggestion providers
pub mod suggestions;

/// HTML rendering
pub mod views;

// Shared foundation types live in picker-core
pub use picker_core::{constants, errors, models};
