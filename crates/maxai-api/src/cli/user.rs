//! User account CLI subcommands: create, list.
//!
//! Superusers can only be created here; the REST API registers regular
//! users only.

use std::collections::HashMap;

use anyhow::Result;
use clap::Subcommand;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;
use dialoguer::Password;

use maxai_core::repository::user::UserRepository;

use super::format::{format_relative_time, plural};
use crate::state::AppState;

/// User account subcommands.
#[derive(Subcommand)]
pub enum UserCommand {
    /// Create a user account.
    Create {
        /// Login name (letters, digits and @.+-_ only).
        username: String,

        /// Grant access to the admin dashboard.
        #[arg(long)]
        superuser: bool,

        /// Password for scripted use. Prompted for when omitted.
        #[arg(long, env = "MAXAI_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// List all user accounts with their search counts.
    #[command(alias = "ls")]
    List,
}

/// Handle a user subcommand.
pub async fn handle_user_command(cmd: UserCommand, state: &AppState, json: bool) -> Result<()> {
    match cmd {
        UserCommand::Create {
            username,
            superuser,
            password,
        } => create_user(state, &username, superuser, password, json).await,
        UserCommand::List => list_users(state, json).await,
    }
}

/// Create a user, prompting twice for the password when not given.
///
/// # Examples
///
/// ```bash
/// # Secure prompt (recommended)
/// maxai user create stitch --superuser
///
/// # Script/automation mode
/// MAXAI_PASSWORD=... maxai user create stitch
/// ```
async fn create_user(
    state: &AppState,
    username: &str,
    superuser: bool,
    password: Option<String>,
    json: bool,
) -> Result<()> {
    let password = match password {
        Some(p) => p,
        None => Password::new()
            .with_prompt(format!("Password for {}", style(username).bold()))
            .with_confirmation("Repeat password", "Passwords do not match")
            .interact()?,
    };

    let user = state
        .account_service
        .create_user(username, &password, superuser)
        .await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&user)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} Created {} '{}'",
        style("✓").green().bold(),
        if user.is_superuser { "superuser" } else { "user" },
        style(&user.username).cyan().bold()
    );
    println!("  {}", style(format!("id: {}", user.id)).dim());
    println!();

    Ok(())
}

async fn list_users(state: &AppState, json: bool) -> Result<()> {
    let users_repo = state.account_service.users();
    let users = users_repo.list_users().await?;
    let counts: HashMap<_, _> = users_repo
        .search_counts()
        .await?
        .into_iter()
        .map(|c| (c.user_id, c.search_count))
        .collect();

    if json {
        let rows: Vec<_> = users
            .iter()
            .map(|u| {
                serde_json::json!({
                    "id": u.id,
                    "username": u.username,
                    "is_superuser": u.is_superuser,
                    "created_at": u.created_at,
                    "search_count": counts.get(&u.id).copied().unwrap_or(0),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if users.is_empty() {
        println!();
        println!(
            "  {} No users yet. Create one with: {}",
            style("i").blue().bold(),
            style("maxai user create <username> --superuser").yellow()
        );
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Username").fg(Color::White),
        Cell::new("Role").fg(Color::White),
        Cell::new("Searches").fg(Color::White),
        Cell::new("Joined").fg(Color::White),
    ]);

    for user in &users {
        let role = if user.is_superuser {
            Cell::new("★ superuser").fg(Color::Yellow)
        } else {
            Cell::new("user").fg(Color::DarkGrey)
        };

        table.add_row(vec![
            Cell::new(&user.username).fg(Color::Cyan),
            role,
            Cell::new(counts.get(&user.id).copied().unwrap_or(0)),
            Cell::new(format_relative_time(&user.created_at)).fg(Color::DarkGrey),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!(
        "  {} user{}",
        style(users.len()).bold(),
        plural(users.len() as u64)
    );
    println!();

    Ok(())
}
