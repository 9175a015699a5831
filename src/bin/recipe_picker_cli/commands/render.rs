// ABOUTME: Page rendering command for recipe-picker
// ABOUTME: Runs both pipelines and writes the resulting state as a standalone HTML page
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use anyhow::{Context, Result};
use recipe_picker::{controller::RecipeController, state::AppState, views::render_page};
use tracing::info;

use super::generate::select_and_generate;

/// Write the page for `state` to `path`
pub async fn write_page(state: &AppState, path: &Path) -> Result<()> {
    tokio::fs::write(path, render_page(state))
        .await
        .with_context(|| format!("failed to write page to {}", path.display()))?;
    info!(path = %path.display(), "Wrote recipe page");
    println!("Wrote page to {}", path.display());
    Ok(())
}

/// Generate a recipe for `ingredients` and save the page
pub async fn run(
    controller: &mut RecipeController,
    ingredients: Vec<String>,
    out: &Path,
) -> Result<()> {
    select_and_generate(controller, ingredients).await;
    write_page(controller.state(), out).await
}
