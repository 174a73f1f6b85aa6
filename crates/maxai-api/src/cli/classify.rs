//! `maxai classify`: run the dispatcher on one query and show the decision.
//!
//! Uses the same tables as the server (built-ins plus `[dispatch]` from
//! config.toml) but never touches the database or the collaborators.

use std::path::Path;

use anyhow::Result;
use console::style;

use maxai_core::dispatch::{Dispatcher, normalize};
use maxai_infra::config::load_global_config;
use maxai_types::dispatch::DispatchResult;

pub async fn classify(data_dir: &Path, query: &str, json: bool) -> Result<()> {
    let config = load_global_config(data_dir).await;
    let dispatcher = Dispatcher::with_overrides(&config.dispatch);
    let (rule, result) = dispatcher.explain(query);

    if json {
        let out = serde_json::json!({
            "query": query,
            "normalized": normalize(query),
            "rule": rule,
            "result": result,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    let outcome = match &result {
        DispatchResult::Chat => style("chat".to_string()).magenta(),
        DispatchResult::SpecialContent(tag) => style(format!("special content ({tag})")).yellow(),
        DispatchResult::Redirect(url) => style(format!("redirect → {url}")).cyan(),
        DispatchResult::FallThroughToSearch => style("search".to_string()).green(),
    };

    println!();
    println!("  Query:      {}", style(query).bold());
    println!("  Normalized: {}", style(normalize(query)).dim());
    println!("  Rule:       {}", rule);
    println!("  Result:     {outcome}");
    println!();

    Ok(())
}
