//! Site-wide statistics command.

use anyhow::Result;
use console::style;

use super::format::{format_relative_time, plural, truncate};
use crate::state::AppState;

/// How many users and searches the styled output lists.
const TOP_USERS: usize = 5;
const LATEST_SEARCHES: usize = 5;

/// Display the same totals the admin dashboard serves.
pub async fn stats(state: &AppState, json: bool) -> Result<()> {
    let dashboard = state
        .query_service
        .dashboard(state.account_service.users())
        .await?;

    if json {
        let out = serde_json::json!({
            "version": env!("CARGO_PKG_VERSION"),
            "data_dir": state.data_dir.display().to_string(),
            "dashboard": dashboard,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} Max AI v{}",
        style("🌺").bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!();

    println!("  {}", style("── Totals ──").dim());
    println!("  Users:    {}", style(dashboard.total_users).bold());
    println!("  Searches: {}", style(dashboard.total_searches).bold());
    println!();

    let active: Vec<_> = dashboard
        .user_counts
        .iter()
        .filter(|c| c.search_count > 0)
        .take(TOP_USERS)
        .collect();
    if !active.is_empty() {
        println!("  {}", style("── Most active ──").dim());
        for count in active {
            println!(
                "  {:<20} {} search{}",
                style(&count.username).cyan(),
                count.search_count,
                if count.search_count == 1 { "" } else { "es" }
            );
        }
        println!();
    }

    if !dashboard.recent_searches.is_empty() {
        println!("  {}", style("── Latest searches ──").dim());
        for search in dashboard.recent_searches.iter().take(LATEST_SEARCHES) {
            println!(
                "  {:<40} {} {}",
                truncate(&search.entry.query, 40),
                style(&search.username).cyan(),
                style(format_relative_time(&search.entry.created_at)).dim()
            );
        }
        println!();
    }

    let idle = dashboard
        .user_counts
        .iter()
        .filter(|c| c.search_count == 0)
        .count() as u64;
    if idle > 0 {
        println!("  {}", style(format!("{idle} idle user{}", plural(idle))).dim());
    }
    println!("  Data:     {}", style(state.data_dir.display()).dim());
    println!();

    Ok(())
}
