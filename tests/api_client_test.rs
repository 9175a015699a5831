// ABOUTME: Integration tests for the recipe backend HTTP client
// ABOUTME: Exercises success decoding and every failure classification against a stub backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use std::time::Duration;

use helpers::stub_backend::{recipe_json, unreachable_base_url, StubBackend, StubReply};
use recipe_picker::constants::endpoints;
use recipe_picker::errors::ErrorCode;
use recipe_picker::external::{HttpRecipeApi, RecipeApi, RecipeApiConfig};
use recipe_picker::models::Servings;
use serde_json::json;

fn client(base_url: String) -> HttpRecipeApi {
    HttpRecipeApi::new(RecipeApiConfig {
        base_url,
        timeout: Duration::from_secs(5),
    })
    .unwrap()
}

fn garlic() -> Vec<String> {
    vec!["Garlic".to_owned()]
}

#[tokio::test]
async fn test_generate_recipe_posts_payload_and_decodes() {
    let backend = StubBackend::builder()
        .generate(StubReply::ok(recipe_json("Garlic Toast", "Garlic")))
        .start()
        .await;

    let recipe = client(backend.base_url())
        .generate_recipe(&garlic())
        .await
        .unwrap();

    assert_eq!(recipe.title, "Garlic Toast");
    assert_eq!(recipe.cook_time, "25 minutes");
    assert_eq!(recipe.servings, Some(Servings::Count(2)));
    assert_eq!(recipe.ingredients, vec!["Garlic"]);
    assert_eq!(recipe.instructions.len(), 1);

    let requests = backend.requests_to(endpoints::GENERATE_RECIPE);
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, axum::http::Method::POST);
    assert_eq!(requests[0].body, Some(json!({"ingredients": ["Garlic"]})));
}

#[tokio::test]
async fn test_error_payload_is_application_error() {
    let backend = StubBackend::builder()
        .generate(StubReply::ok(json!({"error": "Gemini quota exceeded"})))
        .start()
        .await;

    let err = client(backend.base_url())
        .generate_recipe(&garlic())
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::ApplicationError);
    assert_eq!(err.user_message(), "Gemini quota exceeded");
    assert_eq!(
        err.context.endpoint.as_deref(),
        Some(endpoints::GENERATE_RECIPE)
    );
}

#[tokio::test]
async fn test_non_success_status_uses_error_member() {
    let backend = StubBackend::builder()
        .generate(StubReply::json(
            400,
            json!({"error": "No ingredients provided"}),
        ))
        .start()
        .await;

    let err = client(backend.base_url())
        .generate_recipe(&garlic())
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::ExternalServiceError);
    assert!(err.message.contains("400"));
    assert!(err.message.contains("No ingredients provided"));
    assert_eq!(err.context.details["status"], 400);
}

#[tokio::test]
async fn test_non_success_status_with_text_body() {
    let backend = StubBackend::builder()
        .generate(StubReply::text(502, "Bad Gateway"))
        .start()
        .await;

    let err = client(backend.base_url())
        .generate_recipe(&garlic())
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::ExternalServiceError);
    assert!(err.message.contains("Bad Gateway"));
}

#[tokio::test]
async fn test_invalid_json_is_decode_error() {
    let backend = StubBackend::builder()
        .generate(StubReply::text(200, "<html>oops</html>"))
        .start()
        .await;

    let err = client(backend.base_url())
        .generate_recipe(&garlic())
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::SerializationError);
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_error() {
    let err = client(unreachable_base_url().await)
        .generate_recipe(&garlic())
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::ExternalServiceUnavailable);
}

#[tokio::test]
async fn test_similar_recipes_decodes_list() {
    let backend = StubBackend::builder()
        .similar(StubReply::ok(json!({
            "recipes": [
                {
                    "title": "Beef Stew",
                    "description": "Hearty",
                    "cook_time": "2 hours",
                    "difficulty": "Medium",
                    "matching_ingredients": ["Beef", "Onion"]
                },
                {"title": "Plain Rice"}
            ]
        })))
        .start()
        .await;

    let recipes = client(backend.base_url())
        .similar_recipes(&garlic())
        .await
        .unwrap();

    assert_eq!(recipes.len(), 2);
    assert_eq!(recipes[0].matching(), ["Beef", "Onion"]);
    assert!(recipes[1].matching_ingredients.is_none());
    assert_eq!(
        backend.requests_to(endpoints::SIMILAR_RECIPES)[0].ingredients(),
        garlic()
    );
}

#[tokio::test]
async fn test_similar_recipes_requires_recipes_array() {
    for body in [json!({}), json!({"recipes": "none"}), json!([])] {
        let backend = StubBackend::builder()
            .similar(StubReply::ok(body))
            .start()
            .await;

        let err = client(backend.base_url())
            .similar_recipes(&garlic())
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::SerializationError);
    }
}

#[tokio::test]
async fn test_ingredient_suggestions_sends_query() {
    let backend = StubBackend::builder()
        .ingredients(StubReply::ok(json!(["Garlic", "Garlic Powder"])))
        .start()
        .await;

    let names = client(backend.base_url())
        .ingredient_suggestions("gar")
        .await
        .unwrap();

    assert_eq!(names, vec!["Garlic", "Garlic Powder"]);
    let requests = backend.requests_to(endpoints::INGREDIENTS);
    assert_eq!(requests[0].method, axum::http::Method::GET);
    assert_eq!(requests[0].query.as_deref(), Some("query=gar"));
}
