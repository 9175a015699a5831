// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for recipe-picker
// ABOUTME: Prints selection, suggestions, recipe, and related-recipe panels as plain text

use recipe_picker::{
    constants::defaults,
    imagery::thumbnail_image,
    models::SimilarRecipe,
    selection::{match_percentage, SelectionSet},
    state::{AppState, PanelState, RecipeDisplay},
};

/// Display the selected ingredients
pub fn display_selection(state: &AppState) {
    let view = state.selection_view();
    if view.placeholder_visible {
        println!("No ingredients selected yet.");
        return;
    }
    let names: Vec<&str> = view.tags.iter().map(|tag| tag.name.as_str()).collect();
    println!("Selected ({}): {}", names.len(), names.join(", "));
}

/// Display numbered suggestions
pub fn display_suggestions(state: &AppState) {
    if !state.suggestions_visible() {
        println!("No suggestions.");
        return;
    }
    for (index, name) in state.suggestions().iter().enumerate() {
        println!("  {:>2}. {name}", index + 1);
    }
}

/// Display the main recipe panel
pub fn display_recipe_panel(state: &AppState) {
    match state.recipe_panel() {
        PanelState::Hidden => {}
        PanelState::Loading => println!("{}", defaults::GENERATE_BUSY_LABEL),
        PanelState::Failed(reason) => println!("\nRecipe failed: {reason}"),
        PanelState::Ready(display) => display_recipe(display),
    }
}

fn display_recipe(display: &RecipeDisplay) {
    let recipe = &display.recipe;
    println!("\n{}", recipe.title);
    println!("{}", "=".repeat(recipe.title.chars().count().max(20)));
    if !recipe.description.is_empty() {
        println!("{}", recipe.description);
    }

    let mut meta = Vec::new();
    if !recipe.cook_time.is_empty() {
        meta.push(format!("Time: {}", recipe.cook_time));
    }
    if !recipe.difficulty.is_empty() {
        meta.push(format!("Difficulty: {}", recipe.difficulty));
    }
    if let Some(servings) = &recipe.servings {
        meta.push(format!("Serves: {servings}"));
    }
    if !meta.is_empty() {
        println!("{}", meta.join(" | "));
    }
    println!("Image: {}", display.hero_image);

    println!("\nIngredients:");
    for ingredient in &recipe.ingredients {
        println!("  - {ingredient}");
    }
    println!("\nInstructions:");
    for (step, instruction) in recipe.instructions.iter().enumerate() {
        println!("  {}. {instruction}", step + 1);
    }
}

/// Display the related recipes gallery
pub fn display_related_panel(state: &AppState) {
    match state.related_panel() {
        PanelState::Hidden => {}
        PanelState::Loading => println!("\nLoading similar recipes..."),
        PanelState::Failed(reason) => {
            println!("\nWarning: could not load similar recipes: {reason}");
        }
        PanelState::Ready(recipes) if recipes.is_empty() => println!("\nNo similar recipes found."),
        PanelState::Ready(recipes) => {
            println!("\nYou might also like:");
            for (index, recipe) in recipes.iter().enumerate() {
                display_card(index, recipe, state.selection());
            }
            println!("\nUse 'make <n>' in a session to cook one of these.");
        }
    }
}

fn display_card(index: usize, recipe: &SimilarRecipe, selection: &SelectionSet) {
    match &recipe.matching_ingredients {
        Some(matching) => println!(
            "  {:>2}. {} (uses {}% of your ingredients)",
            index + 1,
            recipe.title,
            match_percentage(selection, matching)
        ),
        None => println!("  {:>2}. {}", index + 1, recipe.title),
    }
    if !recipe.description.is_empty() {
        println!("      {}", recipe.description);
    }
    let meta: Vec<String> = [
        (!recipe.cook_time.is_empty()).then(|| recipe.cook_time.clone()),
        (!recipe.difficulty.is_empty()).then(|| recipe.difficulty.clone()),
        recipe.servings.as_ref().map(|s| format!("serves {s}")),
    ]
    .into_iter()
    .flatten()
    .collect();
    if !meta.is_empty() {
        println!("      {}", meta.join(" | "));
    }
    if let Some(matching) = &recipe.matching_ingredients {
        println!("      Uses: {}", matching.join(", "));
    }
    println!("      Image: {}", thumbnail_image(recipe));
}

/// Display the session command reference
pub fn display_session_help() {
    println!("Commands:");
    println!("  add <name>     add an ingredient (no name: add the typed text)");
    println!("  remove <name>  remove an ingredient");
    println!("  clear          remove every ingredient and hide results");
    println!("  type <text>    type into the ingredient box and list suggestions");
    println!("  pick <n>       add suggestion number n");
    println!("  dismiss        close the suggestion list");
    println!("  generate       request a recipe for the selection");
    println!("  make <n>       cook related recipe number n");
    println!("  show           print the current state");
    println!("  html <file>    write the current page as HTML");
    println!("  help           show this list");
    println!("  quit           leave the session");
}
