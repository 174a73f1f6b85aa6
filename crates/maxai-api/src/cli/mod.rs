//! CLI command definitions and dispatch for the `maxai` binary.
//!
//! Uses clap derive macros for argument parsing. Resource commands follow a
//! noun-verb pattern (e.g., `maxai user create`, `maxai history list`).

pub mod classify;
pub mod format;
pub mod history;
pub mod stats;
pub mod user;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Max AI: a playful assistant that turns queries into redirects, chats, and searches.
#[derive(Parser)]
#[command(name = "maxai", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the REST API server.
    Serve {
        /// Port to listen on (defaults to `[server] port` in config.toml).
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (defaults to `[server] host` in config.toml).
        #[arg(long)]
        host: Option<String>,
    },

    /// Show how a query would be dispatched, without running it.
    Classify {
        /// The query text, exactly as a user would type it.
        query: String,
    },

    /// Manage user accounts (create, list).
    User {
        #[command(subcommand)]
        action: user::UserCommand,
    },

    /// Inspect or clear a user's search history.
    History {
        #[command(subcommand)]
        action: history::HistoryCommand,
    },

    /// Site-wide totals: users, searches, and the busiest users.
    Stats,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_user_create_superuser() {
        let cli = Cli::try_parse_from(["maxai", "user", "create", "lilo", "--superuser"]).unwrap();
        match cli.command {
            Commands::User {
                action:
                    user::UserCommand::Create {
                        username,
                        superuser,
                        ..
                    },
            } => {
                assert_eq!(username, "lilo");
                assert!(superuser);
            }
            _ => panic!("expected user create"),
        }
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["maxai", "stats", "--json", "-vv"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_serve_defaults_come_from_config() {
        let cli = Cli::try_parse_from(["maxai", "serve"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Serve {
                port: None,
                host: None
            }
        ));
    }
}
