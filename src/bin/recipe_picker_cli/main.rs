// ABOUTME: Recipe Picker CLI - command-line front end for the recipe request client
// ABOUTME: Handles suggestion lookup, recipe generation, page rendering, and interactive sessions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Autocomplete against the backend
//! recipe-picker suggest chick
//!
//! # Autocomplete against the built-in catalog
//! recipe-picker --local suggest gar
//!
//! # Generate a recipe and list related ideas
//! recipe-picker generate Garlic "Chicken Breast" Lemon
//!
//! # Write the full page for a generated recipe
//! recipe-picker render Garlic Lemon --out recipe.html
//!
//! # Interactive session
//! recipe-picker session
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use recipe_picker::{
    config::ClientConfig, controller::RecipeController, errors::AppResult,
    imagery::HeroImagePolicy, logging::LoggingConfig,
};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "recipe-picker",
    about = "Recipe Picker client",
    long_about = "Pick ingredients, request AI-generated recipes, and browse related recipe ideas."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Recipe backend base URL override
    #[arg(long, global = true, value_name = "URL")]
    api_url: Option<String>,

    /// Use the local ingredient catalog for suggestions
    #[arg(long, global = true)]
    local: bool,

    /// JSON ingredient catalog file (implies --local)
    #[arg(long, global = true, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Hero image policy: "default" or "category"
    #[arg(long, global = true, value_name = "POLICY")]
    hero_policy: Option<HeroImagePolicy>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// List ingredient suggestions for a partial name
    Suggest {
        /// Partial ingredient name (at least two characters)
        query: String,
    },

    /// Generate a recipe and fetch related recipe ideas
    Generate {
        /// Ingredients to cook with
        #[arg(required = true)]
        ingredients: Vec<String>,
    },

    /// Generate a recipe and write the resulting page as HTML
    Render {
        /// Ingredients to cook with
        #[arg(required = true)]
        ingredients: Vec<String>,

        /// Output file
        #[arg(long, short = 'o')]
        out: PathBuf,
    },

    /// Interactive session reading commands from stdin
    Session,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.verbose();
    }
    logging.init()?;

    let config = load_config(&cli)?;
    debug!("{}", config.summary());
    let mut controller = RecipeController::from_config(&config)?;

    match cli.command {
        Command::Suggest { query } => commands::suggest::run(&mut controller, query).await,
        Command::Generate { ingredients } => {
            commands::generate::run(&mut controller, ingredients).await
        }
        Command::Render { ingredients, out } => {
            commands::render::run(&mut controller, ingredients, &out).await
        }
        Command::Session => commands::session::run(&mut controller).await,
    }
}

/// Environment configuration with command-line overrides applied
fn load_config(cli: &Cli) -> AppResult<ClientConfig> {
    let mut config = ClientConfig::from_env()?;
    if let Some(url) = &cli.api_url {
        config = config.with_base_url(url)?;
    }
    if cli.local || cli.catalog.is_some() {
        config = config.with_local_catalog(cli.catalog.as_deref());
    }
    if let Some(policy) = cli.hero_policy {
        config = config.with_hero_policy(policy);
    }
    Ok(config)
}
