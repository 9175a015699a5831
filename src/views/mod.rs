// ABOUTME: Rendering of the application state into HTML fragments and pages
// ABOUTME: Re-exports the HTML renderer functions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Views
//!
//! Renderers are pure functions of the state. Element ids and CSS classes follow the
//! picker page markup so fragments can be swapped into it directly.

/// HTML fragment and page rendering
pub mod html;

pub use html::{
    render_page, render_recipe_panel, render_related_panel, render_selection, render_suggestions,
};
