// ABOUTME: End-to-end tests for the recipe and related-recipe pipelines
// ABOUTME: Drives RecipeController against a stub backend and checks state and requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use helpers::stub_backend::{recipe_json, unreachable_base_url, StubBackend, StubReply};
use recipe_picker::actions::Action;
use recipe_picker::config::ClientConfig;
use recipe_picker::constants::endpoints;
use recipe_picker::controller::RecipeController;
use recipe_picker::imagery::DEFAULT_IMAGE;
use recipe_picker::views::render_page;
use serde_json::json;

fn controller_for(base_url: &str) -> RecipeController {
    let config = ClientConfig::default().with_base_url(base_url).unwrap();
    RecipeController::from_config(&config).unwrap()
}

fn similar_body() -> serde_json::Value {
    json!({
        "recipes": [
            {
                "title": "Garlic Bread",
                "description": "Crispy",
                "cook_time": "15 minutes",
                "difficulty": "Easy",
                "matching_ingredients": ["Garlic"]
            },
            {
                "title": "Beef Stew",
                "description": "Hearty",
                "cook_time": "2 hours",
                "difficulty": "Medium",
                "matching_ingredients": ["Beef", "Onion"]
            }
        ]
    })
}

#[tokio::test]
async fn test_generate_with_empty_selection_sends_nothing() {
    let backend = StubBackend::builder().start().await;
    let mut controller = controller_for(&backend.base_url());

    controller.dispatch(Action::Generate).await;

    assert!(backend.requests().is_empty());
    assert!(controller.state().recipe_panel().is_hidden());
    assert!(controller.state().related_panel().is_hidden());
    assert!(!controller.state().generate_busy());
}

#[tokio::test]
async fn test_generate_renders_recipe_then_fetches_related() {
    let backend = StubBackend::builder()
        .generate(StubReply::ok(recipe_json("Garlic Toast", "Garlic")))
        .similar(StubReply::ok(similar_body()))
        .start()
        .await;
    let mut controller = controller_for(&backend.base_url());

    controller
        .dispatch_all([Action::AddIngredient("Garlic".to_owned()), Action::Generate])
        .await;

    let state = controller.state();
    let display = state.recipe_panel().ready().unwrap();
    assert_eq!(display.recipe.title, "Garlic Toast");
    assert_eq!(display.recipe.ingredients.len(), 1);
    assert_eq!(display.recipe.instructions.len(), 1);
    assert_eq!(display.hero_image, DEFAULT_IMAGE);
    assert!(!state.generate_busy());

    let generate = backend.requests_to(endpoints::GENERATE_RECIPE);
    assert_eq!(generate.len(), 1);
    assert_eq!(generate[0].ingredients(), vec!["Garlic"]);

    let similar = backend.requests_to(endpoints::SIMILAR_RECIPES);
    assert_eq!(similar.len(), 1);
    assert_eq!(similar[0].ingredients(), vec!["Garlic"]);

    let related = state.related_panel().ready().unwrap();
    assert_eq!(related.len(), 2);
    assert_eq!(related[1].title, "Beef Stew");
}

#[tokio::test]
async fn test_failed_generate_skips_related_pipeline() {
    let backend = StubBackend::builder()
        .generate(StubReply::ok(json!({"error": "Model unavailable"})))
        .start()
        .await;
    let mut controller = controller_for(&backend.base_url());

    controller
        .dispatch_all([Action::AddIngredient("Garlic".to_owned()), Action::Generate])
        .await;

    let state = controller.state();
    assert_eq!(state.recipe_panel().failure(), Some("Model unavailable"));
    assert!(state.related_panel().is_hidden());
    assert!(!state.generate_busy());
    assert!(backend.requests_to(endpoints::SIMILAR_RECIPES).is_empty());
}

#[tokio::test]
async fn test_unreachable_backend_surfaces_error_panel() {
    let mut controller = controller_for(&unreachable_base_url().await);

    controller
        .dispatch_all([Action::AddIngredient("Garlic".to_owned()), Action::Generate])
        .await;

    let state = controller.state();
    assert_eq!(state.recipe_panel().as_str(), "error");
    assert!(state.recipe_panel().failure().is_some());
    assert!(!state.generate_busy());
}

#[tokio::test]
async fn test_bad_related_reply_keeps_recipe_and_warns() {
    let backend = StubBackend::builder()
        .generate(StubReply::ok(recipe_json("Garlic Toast", "Garlic")))
        .similar(StubReply::ok(json!({"unexpected": true})))
        .start()
        .await;
    let mut controller = controller_for(&backend.base_url());

    controller
        .dispatch_all([Action::AddIngredient("Garlic".to_owned()), Action::Generate])
        .await;

    let state = controller.state();
    assert!(state.recipe_panel().ready().is_some());
    assert_eq!(state.related_panel().as_str(), "error");

    let page = render_page(state);
    assert!(page.contains("Garlic Toast"));
    assert!(page.contains("alert-warning"));
}

#[tokio::test]
async fn test_make_related_recipe_replaces_selection_and_regenerates() {
    let backend = StubBackend::builder()
        .generate(StubReply::ok(recipe_json("Garlic Toast", "Garlic")))
        .generate(StubReply::ok(recipe_json("Beef Stew", "Beef")))
        .similar(StubReply::ok(similar_body()))
        .start()
        .await;
    let mut controller = controller_for(&backend.base_url());

    controller
        .dispatch_all([
            Action::AddIngredient("Garlic".to_owned()),
            Action::AddIngredient("Salt".to_owned()),
            Action::Generate,
        ])
        .await;
    controller.dispatch(Action::SelectRelated(1)).await;

    let state = controller.state();
    assert_eq!(state.selection().to_payload(), vec!["Beef", "Onion"]);
    assert_eq!(
        state.recipe_panel().ready().unwrap().recipe.title,
        "Beef Stew"
    );

    let generate = backend.requests_to(endpoints::GENERATE_RECIPE);
    assert_eq!(generate.len(), 2);
    assert_eq!(generate[1].ingredients(), vec!["Beef", "Onion"]);
    assert_eq!(
        backend.requests_to(endpoints::SIMILAR_RECIPES)[1].ingredients(),
        vec!["Beef", "Onion"]
    );
}

#[tokio::test]
async fn test_short_query_does_not_hit_backend() {
    let backend = StubBackend::builder()
        .ingredients(StubReply::ok(json!(["Garlic"])))
        .start()
        .await;
    let mut controller = controller_for(&backend.base_url());

    controller.dispatch(Action::QueryChanged("g".to_owned())).await;

    assert!(backend.requests_to(endpoints::INGREDIENTS).is_empty());
    assert!(!controller.state().suggestions_visible());

    controller.dispatch(Action::QueryChanged("ga".to_owned())).await;

    assert_eq!(backend.requests_to(endpoints::INGREDIENTS).len(), 1);
    assert!(controller.state().suggestions_visible());
    assert_eq!(controller.state().suggestions(), ["Garlic"]);
}

#[tokio::test]
async fn test_remote_suggestion_failure_hides_panel() {
    let backend = StubBackend::builder()
        .ingredients(StubReply::text(500, "boom"))
        .start()
        .await;
    let mut controller = controller_for(&backend.base_url());

    controller
        .dispatch(Action::QueryChanged("gar".to_owned()))
        .await;

    assert!(!controller.state().suggestions_visible());
    assert!(controller.state().suggestions().is_empty());
}

#[tokio::test]
async fn test_regenerate_shows_latest_recipe() {
    let backend = StubBackend::builder()
        .generate(StubReply::ok(recipe_json("First", "Garlic")))
        .generate(StubReply::ok(recipe_json("Second", "Garlic")))
        .similar(StubReply::ok(json!({"recipes": []})))
        .start()
        .await;
    let mut controller = controller_for(&backend.base_url());

    controller
        .dispatch_all([
            Action::AddIngredient("Garlic".to_owned()),
            Action::Generate,
            Action::Generate,
        ])
        .await;

    let state = controller.state();
    assert_eq!(state.recipe_panel().ready().unwrap().recipe.title, "Second");
    assert_eq!(state.related_panel().ready().map(Vec::len), Some(0));
    assert_eq!(backend.requests_to(endpoints::GENERATE_RECIPE).len(), 2);
}
