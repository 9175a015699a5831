// ABOUTME: Interactive session command for recipe-picker
// ABOUTME: Reads line commands from stdin and dispatches them as picker actions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::PathBuf;

use anyhow::Result;
use recipe_picker::{actions::Action, controller::RecipeController};
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::warn;

use super::render::write_page;
use crate::helpers::display::{
    display_recipe_panel, display_related_panel, display_selection, display_session_help,
    display_suggestions,
};

/// One parsed session line
#[derive(Debug, Clone, PartialEq, Eq)]
enum SessionCommand {
    Add(Option<String>),
    Remove(String),
    Clear,
    Type(String),
    Pick(usize),
    Dismiss,
    Generate,
    Make(usize),
    Show,
    Html(PathBuf),
    Help,
    Quit,
}

impl SessionCommand {
    fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(word, rest)| (word, rest.trim()));
        let argument = |usage: &str| {
            if rest.is_empty() {
                Err(format!("usage: {usage}"))
            } else {
                Ok(rest.to_owned())
            }
        };
        let number = |usage: &str| {
            rest.parse::<usize>()
                .ok()
                .filter(|&n| n > 0)
                .ok_or_else(|| format!("usage: {usage} (n starts at 1)"))
        };

        match word.to_lowercase().as_str() {
            "add" => Ok(Self::Add((!rest.is_empty()).then(|| rest.to_owned()))),
            "remove" | "rm" => argument("remove <name>").map(Self::Remove),
            "clear" => Ok(Self::Clear),
            "type" => Ok(Self::Type(rest.to_owned())),
            "pick" => number("pick <n>").map(Self::Pick),
            "dismiss" => Ok(Self::Dismiss),
            "generate" | "gen" => Ok(Self::Generate),
            "make" => number("make <n>").map(Self::Make),
            "show" => Ok(Self::Show),
            "html" => argument("html <file>").map(|path| Self::Html(PathBuf::from(path))),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(format!("unknown command '{other}', type 'help' for a list")),
        }
    }
}

/// Run the interactive session until `quit` or end of input
pub async fn run(controller: &mut RecipeController) -> Result<()> {
    display_session_help();
    let mut lines = BufReader::new(io::stdin()).lines();
    let mut stdout = io::stdout();

    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }
        match SessionCommand::parse(&line) {
            Ok(SessionCommand::Quit) => break,
            Ok(command) => execute(controller, command).await,
            Err(message) => println!("{message}"),
        }
    }
    Ok(())
}

async fn execute(controller: &mut RecipeController, command: SessionCommand) {
    match command {
        SessionCommand::Add(Some(name)) => {
            controller.dispatch(Action::AddIngredient(name)).await;
            display_selection(controller.state());
        }
        SessionCommand::Add(None) => {
            controller.dispatch(Action::SubmitInput).await;
            display_selection(controller.state());
        }
        SessionCommand::Remove(name) => {
            controller.dispatch(Action::RemoveIngredient(name)).await;
            display_selection(controller.state());
        }
        SessionCommand::Clear => {
            controller.dispatch(Action::Clear).await;
            display_selection(controller.state());
        }
        SessionCommand::Type(text) => {
            controller.dispatch(Action::QueryChanged(text)).await;
            display_suggestions(controller.state());
        }
        SessionCommand::Pick(n) => {
            let Some(name) = controller.state().suggestions().get(n - 1).cloned() else {
                println!("No suggestion {n}; use 'type <text>' first.");
                return;
            };
            controller.dispatch(Action::AddIngredient(name)).await;
            display_selection(controller.state());
        }
        SessionCommand::Dismiss => controller.dispatch(Action::DismissSuggestions).await,
        SessionCommand::Generate => {
            if controller.state().selection().is_empty() {
                println!("Add at least one ingredient first.");
                return;
            }
            controller.dispatch(Action::Generate).await;
            display_recipe_panel(controller.state());
            display_related_panel(controller.state());
        }
        SessionCommand::Make(n) => {
            controller.dispatch(Action::SelectRelated(n - 1)).await;
            display_selection(controller.state());
            display_recipe_panel(controller.state());
            display_related_panel(controller.state());
        }
        SessionCommand::Show => {
            let state = controller.state();
            display_selection(state);
            display_recipe_panel(state);
            display_related_panel(state);
        }
        SessionCommand::Html(path) => {
            if let Err(e) = write_page(controller.state(), &path).await {
                warn!(error = %e, "Failed to write page");
                println!("{e:#}");
            }
        }
        SessionCommand::Help => display_session_help(),
        SessionCommand::Quit => {}
    }
}
