// ABOUTME: Keyword-driven image selection for recipe heroes and gallery thumbnails
// ABOUTME: Ordered category table, first-match-wins lookup, and a configurable hero policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Imagery
//!
//! Images are picked by scanning the lowercased title, then the lowercased ingredient
//! text, for category keywords. The first table entry that matches wins, so table
//! order is the priority order.
//!
//! The main recipe hero historically always showed the default image even when a
//! category matched; [`HeroImagePolicy::DefaultOnly`] keeps that behavior and
//! [`HeroImagePolicy::MatchedCategory`] opts into the matched asset. Gallery
//! thumbnails always use the matched category.

use std::fmt;
use std::str::FromStr;

use picker_core::errors::AppError;
use picker_core::models::{Recipe, SimilarRecipe};

/// Asset shown when no category matches
pub const DEFAULT_IMAGE: &str = "images/recipes/default.jpg";

/// A keyword and the asset it selects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageCategory {
    /// Lowercase keyword searched for
    pub keyword: &'static str,
    /// Asset path
    pub image: &'static str,
}

/// Category table in priority order
pub const IMAGE_CATEGORIES: &[ImageCategory] = &[
    ImageCategory {
        keyword: "pasta",
        image: "images/recipes/pasta.jpg",
    },
    ImageCategory {
        keyword: "spaghetti",
        image: "images/recipes/pasta.jpg",
    },
    ImageCategory {
        keyword: "noodle",
        image: "images/recipes/noodles.jpg",
    },
    ImageCategory {
        keyword: "pizza",
        image: "images/recipes/pizza.jpg",
    },
    ImageCategory {
        keyword: "salad",
        image: "images/recipes/salad.jpg",
    },
    ImageCategory {
        keyword: "soup",
        image: "images/recipes/soup.jpg",
    },
    ImageCategory {
        keyword: "stew",
        image: "images/recipes/soup.jpg",
    },
    ImageCategory {
        keyword: "curry",
        image: "images/recipes/curry.jpg",
    },
    ImageCategory {
        keyword: "stir fry",
        image: "images/recipes/stir-fry.jpg",
    },
    ImageCategory {
        keyword: "taco",
        image: "images/recipes/tacos.jpg",
    },
    ImageCategory {
        keyword: "burger",
        image: "images/recipes/burger.jpg",
    },
    ImageCategory {
        keyword: "cake",
        image: "images/recipes/dessert.jpg",
    },
    ImageCategory {
        keyword: "cookie",
        image: "images/recipes/dessert.jpg",
    },
    ImageCategory {
        keyword: "chocolate",
        image: "images/recipes/dessert.jpg",
    },
    ImageCategory {
        keyword: "chicken",
        image: "images/recipes/chicken.jpg",
    },
    ImageCategory {
        keyword: "beef",
        image: "images/recipes/beef.jpg",
    },
    ImageCategory {
        keyword: "steak",
        image: "images/recipes/beef.jpg",
    },
    ImageCategory {
        keyword: "pork",
        image: "images/recipes/pork.jpg",
    },
    ImageCategory {
        keyword: "lamb",
        image: "images/recipes/lamb.jpg",
    },
    ImageCategory {
        keyword: "salmon",
        image: "images/recipes/fish.jpg",
    },
    ImageCategory {
        keyword: "fish",
        image: "images/recipes/fish.jpg",
    },
    ImageCategory {
        keyword: "shrimp",
        image: "images/recipes/seafood.jpg",
    },
    ImageCategory {
        keyword: "tofu",
        image: "images/recipes/vegetarian.jpg",
    },
    ImageCategory {
        keyword: "egg",
        image: "images/recipes/eggs.jpg",
    },
    ImageCategory {
        keyword: "rice",
        image: "images/recipes/rice.jpg",
    },
    ImageCategory {
        keyword: "vegetable",
        image: "images/recipes/vegetarian.jpg",
    },
];

/// How the main recipe hero image is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeroImagePolicy {
    /// Always the default asset, whatever matched
    #[default]
    DefaultOnly,
    /// The matched category's asset, default when nothing matches
    MatchedCategory,
}

impl fmt::Display for HeroImagePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::DefaultOnly => "default",
            Self::MatchedCategory => "category",
        })
    }
}

impl FromStr for HeroImagePolicy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "default" | "default-only" => Ok(Self::DefaultOnly),
            "category" | "matched" | "matched-category" => Ok(Self::MatchedCategory),
            other => Err(AppError::config_invalid(format!(
                "unknown hero image policy '{other}' (expected 'default' or 'category')"
            ))),
        }
    }
}

/// First category whose keyword occurs in the title or the joined ingredient text
#[must_use]
pub fn category_for<S: AsRef<str>>(
    title: &str,
    ingredients: &[S],
) -> Option<&'static ImageCategory> {
    let title = title.to_lowercase();
    let ingredient_text = ingredients
        .iter()
        .map(|name| name.as_ref().to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");
    IMAGE_CATEGORIES.iter().find(|category| {
        title.contains(category.keyword) || ingredient_text.contains(category.keyword)
    })
}

/// Hero image for the main recipe panel
#[must_use]
pub fn hero_image(recipe: &Recipe, policy: HeroImagePolicy) -> &'static str {
    match policy {
        HeroImagePolicy::DefaultOnly => DEFAULT_IMAGE,
        HeroImagePolicy::MatchedCategory => {
            category_for(&recipe.title, &recipe.ingredients).map_or(DEFAULT_IMAGE, |c| c.image)
        }
    }
}

/// Thumbnail for a related-recipe card
#[must_use]
pub fn thumbnail_image(recipe: &SimilarRecipe) -> &'static str {
    category_for(&recipe.title, recipe.matching()).map_or(DEFAULT_IMAGE, |c| c.image)
}
