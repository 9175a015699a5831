// ABOUTME: Recipe generation command for recipe-picker
// ABOUTME: Selects the given ingredients, runs both pipelines, and prints the results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{bail, Result};
use recipe_picker::{actions::Action, controller::RecipeController};

use crate::helpers::display::{display_recipe_panel, display_related_panel, display_selection};

/// Select `ingredients` and run the recipe and related-recipe pipelines
pub async fn select_and_generate(controller: &mut RecipeController, ingredients: Vec<String>) {
    controller
        .dispatch_all(ingredients.into_iter().map(Action::AddIngredient))
        .await;
    controller.dispatch(Action::Generate).await;
}

/// Generate a recipe and print it with its related ideas
pub async fn run(controller: &mut RecipeController, ingredients: Vec<String>) -> Result<()> {
    select_and_generate(controller, ingredients).await;

    let state = controller.state();
    display_selection(state);
    display_recipe_panel(state);
    display_related_panel(state);

    if let Some(reason) = state.recipe_panel().failure() {
        bail!("recipe generation failed: {reason}");
    }
    Ok(())
}
