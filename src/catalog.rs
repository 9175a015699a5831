// ABOUTME: Static ingredient catalog used for local autocomplete suggestions
// ABOUTME: Provides a built-in ordered word list and loading from a JSON array file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Ingredient Catalog
//!
//! An in-memory, ordered list of known ingredient names. It is only consulted when
//! suggestions come from the local source; in remote mode the backend owns the list.

use std::path::Path;

use picker_core::errors::{AppError, AppResult};
use tracing::debug;

/// Built-in ingredient names, in display order
const BUILTIN_INGREDIENTS: &[&str] = &[
    // Proteins
    "Chicken Breast",
    "Chicken Thigh",
    "Chicken Wings",
    "Ground Chicken",
    "Ground Beef",
    "Beef Steak",
    "Beef Brisket",
    "Pork Chops",
    "Pork Belly",
    "Pork Tenderloin",
    "Ground Pork",
    "Bacon",
    "Ham",
    "Sausage",
    "Chorizo",
    "Lamb Chops",
    "Ground Lamb",
    "Turkey Breast",
    "Ground Turkey",
    "Duck Breast",
    "Salmon",
    "Tuna",
    "Cod",
    "Tilapia",
    "Halibut",
    "Trout",
    "Sardines",
    "Anchovies",
    "Shrimp",
    "Prawns",
    "Scallops",
    "Crab",
    "Lobster",
    "Mussels",
    "Clams",
    "Squid",
    "Eggs",
    "Tofu",
    "Tempeh",
    "Seitan",
    // Dairy
    "Milk",
    "Heavy Cream",
    "Sour Cream",
    "Greek Yogurt",
    "Butter",
    "Cheddar Cheese",
    "Mozzarella",
    "Parmesan",
    "Feta Cheese",
    "Goat Cheese",
    "Ricotta",
    "Cream Cheese",
    "Gruyere",
    "Blue Cheese",
    // Vegetables
    "Onion",
    "Red Onion",
    "Green Onion",
    "Shallot",
    "Garlic",
    "Ginger",
    "Tomato",
    "Cherry Tomatoes",
    "Potato",
    "Sweet Potato",
    "Carrot",
    "Celery",
    "Bell Pepper",
    "Red Bell Pepper",
    "Jalapeno",
    "Chili Pepper",
    "Broccoli",
    "Cauliflower",
    "Cabbage",
    "Red Cabbage",
    "Brussels Sprouts",
    "Spinach",
    "Kale",
    "Lettuce",
    "Arugula",
    "Zucchini",
    "Eggplant",
    "Cucumber",
    "Mushrooms",
    "Shiitake Mushrooms",
    "Asparagus",
    "Green Beans",
    "Peas",
    "Corn",
    "Leek",
    "Fennel",
    "Beetroot",
    "Radish",
    "Turnip",
    "Butternut Squash",
    "Pumpkin",
    "Artichoke",
    "Bok Choy",
    "Avocado",
    // Fruits
    "Lemon",
    "Lime",
    "Orange",
    "Apple",
    "Banana",
    "Pear",
    "Peach",
    "Mango",
    "Pineapple",
    "Strawberries",
    "Blueberries",
    "Raspberries",
    "Cranberries",
    "Grapes",
    "Cherries",
    "Coconut",
    "Dates",
    "Raisins",
    // Grains and starches
    "Rice",
    "Brown Rice",
    "Basmati Rice",
    "Jasmine Rice",
    "Arborio Rice",
    "Pasta",
    "Spaghetti",
    "Penne",
    "Egg Noodles",
    "Rice Noodles",
    "Quinoa",
    "Couscous",
    "Bulgur",
    "Oats",
    "Barley",
    "Bread",
    "Tortillas",
    "Pita Bread",
    "Breadcrumbs",
    "All-Purpose Flour",
    "Whole Wheat Flour",
    "Cornmeal",
    "Cornstarch",
    // Legumes and nuts
    "Black Beans",
    "Kidney Beans",
    "Chickpeas",
    "Lentils",
    "Red Lentils",
    "White Beans",
    "Edamame",
    "Almonds",
    "Walnuts",
    "Cashews",
    "Peanuts",
    "Pecans",
    "Pine Nuts",
    "Sesame Seeds",
    "Chia Seeds",
    "Peanut Butter",
    // Herbs and spices
    "Basil",
    "Parsley",
    "Cilantro",
    "Mint",
    "Rosemary",
    "Thyme",
    "Oregano",
    "Dill",
    "Sage",
    "Bay Leaves",
    "Chives",
    "Cumin",
    "Coriander",
    "Paprika",
    "Smoked Paprika",
    "Turmeric",
    "Cinnamon",
    "Nutmeg",
    "Cloves",
    "Cardamom",
    "Curry Powder",
    "Garam Masala",
    "Chili Powder",
    "Cayenne Pepper",
    "Red Pepper Flakes",
    "Black Pepper",
    "Salt",
    // Pantry
    "Olive Oil",
    "Vegetable Oil",
    "Sesame Oil",
    "Coconut Oil",
    "Coconut Milk",
    "Soy Sauce",
    "Fish Sauce",
    "Oyster Sauce",
    "Hoisin Sauce",
    "Worcestershire Sauce",
    "Hot Sauce",
    "Sriracha",
    "Tomato Paste",
    "Tomato Sauce",
    "Canned Tomatoes",
    "Chicken Stock",
    "Chicken Broth",
    "Beef Stock",
    "Vegetable Broth",
    "Balsamic Vinegar",
    "Apple Cider Vinegar",
    "Rice Vinegar",
    "White Wine Vinegar",
    "Dijon Mustard",
    "Mayonnaise",
    "Ketchup",
    "Honey",
    "Maple Syrup",
    "Brown Sugar",
    "Sugar",
    "Baking Powder",
    "Baking Soda",
    "Vanilla Extract",
    "Cocoa Powder",
    "Dark Chocolate",
    "White Wine",
    "Red Wine",
];

/// Ordered list of known ingredient names
#[derive(Debug, Clone, Default)]
pub struct IngredientCatalog {
    entries: Vec<String>,
}

impl IngredientCatalog {
    /// Create a catalog from an ordered list of names
    #[must_use]
    pub fn new(entries: Vec<String>) -> Self {
        Self { entries }
    }

    /// The built-in catalog shipped with the client
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(
            BUILTIN_INGREDIENTS
                .iter()
                .map(|&name| name.to_owned())
                .collect(),
        )
    }

    /// Load a catalog from a JSON file containing an array of strings
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the file cannot be read, or `ConfigInvalid` if it is
    /// not a JSON array of strings.
    pub fn from_json_file(path: &Path) -> AppResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let entries: Vec<String> = serde_json::from_str(&raw).map_err(|e| {
            AppError::config_invalid(format!(
                "ingredient catalog {} is not a JSON array of strings: {e}",
                path.display()
            ))
        })?;
        debug!(
            path = %path.display(),
            entries = entries.len(),
            "Loaded ingredient catalog"
        );
        Ok(Self::new(entries))
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Entries whose lowercase form contains `query`, lazily and in catalog order
    ///
    /// `query` is expected to be lowercased already.
    pub fn filter<'a>(&'a self, query: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.iter()
            .filter(move |entry| entry.to_lowercase().contains(query))
    }
}
