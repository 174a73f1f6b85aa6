//! Search history CLI subcommands: list, clear.

use anyhow::{Context, Result};
use clap::Subcommand;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;
use dialoguer::Confirm;

use maxai_core::repository::history::HistoryRepository;
use maxai_core::repository::user::UserRepository;
use maxai_types::user::User;

use super::format::{format_relative_time, truncate};
use crate::state::AppState;

/// Search history subcommands.
#[derive(Subcommand)]
pub enum HistoryCommand {
    /// Show a user's most recent queries, newest first.
    #[command(alias = "ls")]
    List {
        /// Username whose history to show.
        username: String,

        /// Maximum entries (defaults to `[history] recent_limit`).
        #[arg(short, long)]
        limit: Option<u32>,
    },

    /// Delete all of a user's history.
    Clear {
        /// Username whose history to delete.
        username: String,

        /// Skip confirmation prompt.
        #[arg(long)]
        force: bool,
    },
}

/// Handle a history subcommand.
pub async fn handle_history_command(
    cmd: HistoryCommand,
    state: &AppState,
    json: bool,
) -> Result<()> {
    match cmd {
        HistoryCommand::List { username, limit } => list_history(state, &username, limit, json).await,
        HistoryCommand::Clear { username, force } => {
            clear_history(state, &username, force, json).await
        }
    }
}

async fn find_user(state: &AppState, username: &str) -> Result<User> {
    state
        .account_service
        .users()
        .get_user_by_username(username)
        .await?
        .with_context(|| format!("User '{username}' not found"))
}

async fn list_history(
    state: &AppState,
    username: &str,
    limit: Option<u32>,
    json: bool,
) -> Result<()> {
    let user = find_user(state, username).await?;
    let limit = limit.unwrap_or(state.config.history.recent_limit);
    let entries = state.query_service.history().list_recent(&user.id, limit).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!();
        println!(
            "  {} No searches yet for '{}'.",
            style("i").blue().bold(),
            style(&user.username).cyan()
        );
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Query").fg(Color::White),
        Cell::new("When").fg(Color::White),
    ]);

    for entry in &entries {
        table.add_row(vec![
            Cell::new(truncate(&entry.query, 60)).fg(Color::Cyan),
            Cell::new(format_relative_time(&entry.created_at)).fg(Color::DarkGrey),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!(
        "  {} search{} for '{}'",
        style(entries.len()).bold(),
        if entries.len() == 1 { "" } else { "es" },
        user.username
    );
    println!();

    Ok(())
}

async fn clear_history(state: &AppState, username: &str, force: bool, json: bool) -> Result<()> {
    let user = find_user(state, username).await?;

    if !force && !json {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Delete all search history for '{}'?",
                style(&user.username).red().bold()
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("  Cancelled.");
            return Ok(());
        }
    }

    let deleted = state.query_service.clear_history(&user.id).await?;

    if json {
        println!(
            "{}",
            serde_json::json!({ "username": user.username, "deleted": deleted })
        );
    } else {
        println!(
            "  {} Cleared {} entr{} for '{}'",
            style("✓").green().bold(),
            style(deleted).bold(),
            if deleted == 1 { "y" } else { "ies" },
            style(&user.username).cyan()
        );
    }

    Ok(())
}
