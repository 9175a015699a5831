// ABOUTME: HTML renderer for the selection, suggestions, recipe, and related-recipe panels
// ABOUTME: Escapes every interpolated value and fills the embedded page template
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::Write as _;

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};
use picker_core::constants::defaults;
use picker_core::models::SimilarRecipe;

use crate::imagery::thumbnail_image;
use crate::selection::{match_percentage, SelectionSet, SelectionView};
use crate::state::{AppState, PanelState, RecipeDisplay};

/// Page template embedded at compile time
const PAGE_TEMPLATE: &str = include_str!("../../templates/recipe_page.html");

const PAGE_TITLE: &str = "Recipe Picker";

const fn hidden(is_hidden: bool) -> &'static str {
    if is_hidden {
        " d-none"
    } else {
        ""
    }
}

/// Selected-ingredient tags with the placeholder, generate, and clear-all controls
#[must_use]
pub fn render_selection(view: &SelectionView, generate_busy: bool) -> String {
    let mut out = String::from(r#"<div id="selected-ingredients" class="selected-ingredients">"#);
    for tag in &view.tags {
        let _ = write!(
            out,
            r#"<span class="ingredient-tag">{name}<span class="remove-btn" data-ingredient="{value}" title="Remove {value}">&times;</span></span>"#,
            name = text(&tag.name),
            value = attr(&tag.name),
        );
    }
    out.push_str("</div>");

    let _ = write!(
        out,
        r#"<p id="no-ingredients-msg" class="text-muted{}">No ingredients selected yet. Start typing to add some.</p>"#,
        hidden(!view.placeholder_visible)
    );

    let label = if generate_busy {
        defaults::GENERATE_BUSY_LABEL
    } else {
        defaults::GENERATE_IDLE_LABEL
    };
    let _ = write!(
        out,
        r#"<div class="mt-3"><button id="generate-btn" class="btn btn-primary me-2"{}{}>{label}</button>"#,
        if view.generate_enabled { "" } else { " disabled" },
        if generate_busy { r#" aria-busy="true""# } else { "" },
    );
    let _ = write!(
        out,
        r#"<button id="clear-all-btn" class="btn btn-outline-secondary{}">Clear All</button></div>"#,
        hidden(!view.clear_visible)
    );
    out
}

/// Autocomplete list under the ingredient input
#[must_use]
pub fn render_suggestions(items: &[String], visible: bool) -> String {
    let mut out = format!(
        r#"<div id="suggestions-container" class="suggestions-container{}">"#,
        hidden(!visible || items.is_empty())
    );
    for item in items {
        let _ = write!(
            out,
            r#"<div class="suggestion-item" data-ingredient="{}">{}</div>"#,
            attr(item),
            text(item)
        );
    }
    out.push_str("</div>");
    out
}

/// Main recipe panel
#[must_use]
pub fn render_recipe_panel(panel: &PanelState<RecipeDisplay>, scroll_into_view: bool) -> String {
    let mut out = format!(
        r#"<div id="recipe-display" class="card mb-4{}" data-state="{}"{}>"#,
        hidden(panel.is_hidden()),
        panel.as_str(),
        if scroll_into_view && !panel.is_hidden() {
            r#" data-scroll-into-view="true""#
        } else {
            ""
        }
    );
    match panel {
        PanelState::Hidden => out.push_str(r#"<div id="recipe-content" class="card-body"></div>"#),
        PanelState::Loading => out.push_str(
            r#"<div id="recipe-content" class="card-body text-center"><div class="spinner-border text-primary" role="status"></div><p class="mt-2">Creating your recipe...</p></div>"#,
        ),
        PanelState::Failed(reason) => {
            let _ = write!(
                out,
                r#"<div id="recipe-content" class="card-body"><div class="alert alert-danger" role="alert">Could not generate a recipe: {}</div></div>"#,
                text(reason)
            );
        }
        PanelState::Ready(display) => render_recipe(&mut out, display),
    }
    out.push_str("</div>");
    out
}

fn render_recipe(out: &mut String, display: &RecipeDisplay) {
    let recipe = &display.recipe;
    let _ = write!(
        out,
        r#"<img class="card-img-top recipe-hero" src="{}" alt="{}">"#,
        attr(display.hero_image),
        attr(&recipe.title)
    );
    let _ = write!(
        out,
        r#"<div id="recipe-content" class="card-body"><h3 class="card-title">{}</h3>"#,
        text(&recipe.title)
    );
    if !recipe.description.is_empty() {
        let _ = write!(out, r#"<p class="text-muted">{}</p>"#, text(&recipe.description));
    }

    out.push_str(r#"<div class="recipe-meta mb-3">"#);
    if !recipe.cook_time.is_empty() {
        let _ = write!(
            out,
            r#"<span class="badge bg-success me-1">{}</span>"#,
            text(&recipe.cook_time)
        );
    }
    if !recipe.difficulty.is_empty() {
        let _ = write!(
            out,
            r#"<span class="badge bg-info me-1">{}</span>"#,
            text(&recipe.difficulty)
        );
    }
    if let Some(servings) = &recipe.servings {
        let _ = write!(
            out,
            r#"<span class="badge bg-secondary">Serves {}</span>"#,
            text(&servings.to_string())
        );
    }
    out.push_str("</div>");

    out.push_str("<h4>Ingredients</h4><ul>");
    for ingredient in &recipe.ingredients {
        let _ = write!(out, "<li>{}</li>", text(ingredient));
    }
    out.push_str("</ul><h4>Instructions</h4><ol>");
    for step in &recipe.instructions {
        let _ = write!(out, "<li>{}</li>", text(step));
    }
    out.push_str("</ol></div>");
}

/// Related recipes gallery
#[must_use]
pub fn render_related_panel(
    panel: &PanelState<Vec<SimilarRecipe>>,
    selection: &SelectionSet,
) -> String {
    let mut out = format!(
        r#"<section id="recipe-results" class="mb-4{}" data-state="{}"><h2 class="h4 mb-3">You Might Also Like</h2><div id="recipes-container" class="row g-3">"#,
        hidden(panel.is_hidden()),
        panel.as_str()
    );
    match panel {
        PanelState::Hidden => {}
        PanelState::Loading => out.push_str(
            r#"<div class="col-12 text-center"><div class="spinner-border text-secondary" role="status"></div></div>"#,
        ),
        PanelState::Failed(reason) => {
            let _ = write!(
                out,
                r#"<div class="col-12"><div class="alert alert-warning" role="alert">Could not load similar recipes: {}</div></div>"#,
                text(reason)
            );
        }
        PanelState::Ready(recipes) if recipes.is_empty() => out.push_str(
            r#"<div class="col-12"><p class="text-muted">No similar recipes found.</p></div>"#,
        ),
        PanelState::Ready(recipes) => {
            for (index, recipe) in recipes.iter().enumerate() {
                render_card(&mut out, index, recipe, selection);
            }
        }
    }
    out.push_str("</div></section>");
    out
}

fn render_card(out: &mut String, index: usize, recipe: &SimilarRecipe, selection: &SelectionSet) {
    let delay_ms = index as u64 * defaults::CARD_ANIMATION_STAGGER_MS;
    let _ = write!(
        out,
        r#"<div class="col-md-6 col-lg-4"><div class="card recipe-card h-100" style="animation-delay: {delay_ms}ms"><img class="card-img-top recipe-thumbnail" src="{}" alt="{}"><div class="card-body"><h5 class="card-title">{}</h5>"#,
        attr(thumbnail_image(recipe)),
        attr(&recipe.title),
        text(&recipe.title)
    );
    if !recipe.description.is_empty() {
        let _ = write!(out, r#"<p class="card-text">{}</p>"#, text(&recipe.description));
    }

    out.push_str(r#"<div class="mb-2">"#);
    for (value, class) in [(&recipe.cook_time, "bg-success"), (&recipe.difficulty, "bg-info")] {
        if !value.is_empty() {
            let _ = write!(out, r#"<span class="badge {class} me-1">{}</span>"#, text(value));
        }
    }
    if let Some(servings) = &recipe.servings {
        let _ = write!(
            out,
            r#"<span class="badge bg-secondary">Serves {}</span>"#,
            text(&servings.to_string())
        );
    }
    out.push_str("</div>");

    if let Some(matching) = &recipe.matching_ingredients {
        let percentage = match_percentage(selection, matching);
        let _ = write!(
            out,
            r#"<div class="progress mb-2" title="Uses {percentage}% of your ingredients"><div class="progress-bar bg-success" style="width: {percentage}%">{percentage}%</div></div>"#
        );
        out.push_str(r#"<p class="mb-1"><strong>Uses:</strong></p><ul class="matching-ingredients">"#);
        for name in matching {
            let class = if selection.contains(name) {
                "text-success"
            } else {
                "text-muted"
            };
            let _ = write!(out, r#"<li class="{class}">{}</li>"#, text(name));
        }
        out.push_str("</ul>");
    }

    let _ = write!(
        out,
        r#"</div><div class="card-footer"><button class="btn btn-outline-primary w-100 make-recipe-btn" data-index="{index}">Make this recipe</button></div></div></div>"#
    );
}

/// Complete standalone page for the current state
#[must_use]
pub fn render_page(state: &AppState) -> String {
    let selection = render_selection(&state.selection_view(), state.generate_busy());
    let suggestions = render_suggestions(state.suggestions(), state.suggestions_visible());
    let recipe = render_recipe_panel(state.recipe_panel(), state.scroll_to_recipe());
    let related = render_related_panel(state.related_panel(), state.selection());
    let input = attr(state.input());

    fill_template(
        PAGE_TEMPLATE,
        &[
            ("TITLE", PAGE_TITLE),
            ("INPUT_VALUE", &*input),
            ("SUGGESTIONS", suggestions.as_str()),
            ("SELECTION", selection.as_str()),
            ("RECIPE_PANEL", recipe.as_str()),
            ("RELATED_PANEL", related.as_str()),
        ],
    )
}

/// Replace `{{KEY}}` placeholders in a single pass so substituted text is never rescanned
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let replacement = after.find("}}").and_then(|end| {
            let key = &after[..end];
            values
                .iter()
                .find(|(candidate, _)| *candidate == key)
                .map(|(_, value)| (end, *value))
        });
        if let Some((end, value)) = replacement {
            out.push_str(value);
            rest = &after[end + 2..];
        } else {
            out.push_str("{{");
            rest = after;
        }
    }
    out.push_str(rest);
    out
}
