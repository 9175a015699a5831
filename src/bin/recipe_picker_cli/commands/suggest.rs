// ABOUTME: Suggestion lookup command for recipe-picker
// ABOUTME: Runs one autocomplete query through the configured provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use recipe_picker::{
    actions::Action, constants::suggestions::MIN_QUERY_CHARS, controller::RecipeController,
    suggestions::SuggestionQuery,
};

use crate::helpers::display::display_suggestions;

/// Print suggestions for `query`
pub async fn run(controller: &mut RecipeController, query: String) -> Result<()> {
    if SuggestionQuery::parse(&query).is_none() {
        println!("Type at least {MIN_QUERY_CHARS} characters to get suggestions.");
        return Ok(());
    }
    controller.dispatch(Action::QueryChanged(query)).await;
    display_suggestions(controller.state());
    Ok(())
}
