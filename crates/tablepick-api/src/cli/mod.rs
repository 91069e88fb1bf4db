//! CLI command definitions for the `tpick` binary.
//!
//! Uses clap derive macros for argument parsing. Subcommands map one-to-one
//! onto the operator tasks: serving, seeding, one-off recommendations and
//! inspection of the history collection.

pub mod history;
pub mod load;
pub mod recommend;
pub mod status;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Recommend a restaurant from your collection.
#[derive(Parser)]
#[command(name = "tpick", version, about, long_about = None)]
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

    /// Export spans through OpenTelemetry (stdout exporter, mixed into command output).
    #[arg(long, global = true)]
    pub otel: bool,

    /// Emit log lines as JSON.
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server.
    Serve {
        /// Port to listen on (overrides config and TABLEPICK_PORT).
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (overrides config).
        #[arg(long)]
        host: Option<String>,
    },

    /// Seed the restaurant collection from a JSON array file.
    Load {
        /// Path to the seed file.
        file: PathBuf,

        /// Clear the collection before writing.
        #[arg(long)]
        replace: bool,
    },

    /// Run one recommendation and print the response.
    #[command(alias = "rec")]
    Recommend {
        /// Cuisine style to match exactly.
        #[arg(long)]
        style: Option<String>,

        /// Vegetarian flag ("true" in any case means vegetarian).
        #[arg(long, num_args = 0..=1, default_missing_value = "true")]
        vegetarian: Option<String>,

        /// Only consider restaurants open right now (UTC).
        #[arg(long, num_args = 0..=1, default_missing_value = "true")]
        open_now: Option<String>,
    },

    /// Show recent request history.
    History {
        /// Maximum number of records to show.
        #[arg(short = 'n', long, default_value = "20")]
        limit: u32,
    },

    /// Show configuration and collection counts.
    Status,

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
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn bare_vegetarian_flag_means_true() {
        let cli = Cli::parse_from(["tpick", "recommend", "--vegetarian", "--style", "thai"]);
        match cli.command {
            Commands::Recommend {
                style,
                vegetarian,
                open_now,
            } => {
                assert_eq!(style.as_deref(), Some("thai"));
                assert_eq!(vegetarian.as_deref(), Some("true"));
                assert!(open_now.is_none());
            }
            _ => panic!("expected recommend"),
        }
    }

    #[test]
    fn serve_flags_are_optional() {
        let cli = Cli::parse_from(["tpick", "serve"]);
        assert!(matches!(
            cli.command,
            Commands::Serve {
                port: None,
                host: None
            }
        ));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["tpick", "history", "-n", "5", "--json", "-vv"]);
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::History { limit: 5 }));
    }

    #[test]
    fn negative_history_limit_is_rejected() {
        assert!(Cli::try_parse_from(["tpick", "history", "--limit=-1"]).is_err());
        assert!(Cli::try_parse_from(["tpick", "history", "--limit", "0"]).is_ok());
    }
}
