use crate::catalog::SkipId;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Skip Hire - book a skip from the terminal
#[derive(Parser, Debug)]
#[command(name = "skiphire")]
#[command(about = "A terminal booking wizard for skip hire")]
#[command(version)]
pub struct Cli {
    /// Settings file (JSON). Defaults are used when omitted.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Write logs to this file instead of the default target
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the interactive booking wizard
    Wizard,
    /// List available skips with prices
    Catalog {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show the price summary for one skip
    Quote {
        /// Catalog id of the skip (e.g. 17934)
        skip_id: SkipId,
    },
    /// Write a settings file with default values
    InitConfig {
        /// Destination path
        path: PathBuf,
    },
    /// Validate a settings file
    Validate {
        /// Path to settings file to validate
        config: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Whether this invocation runs the full-screen wizard.
    pub fn is_tui_mode(&self) -> bool {
        matches!(self.command, None | Some(Commands::Wizard))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_runs_wizard() {
        let cli = Cli::try_parse_from(["skiphire"]).expect("parse");
        assert!(cli.command.is_none());
        assert!(cli.is_tui_mode());
    }

    #[test]
    fn test_quote_parses_id() {
        let cli = Cli::try_parse_from(["skiphire", "quote", "17934"]).expect("parse");
        assert_eq!(cli.command, Some(Commands::Quote { skip_id: 17934 }));
        assert!(!cli.is_tui_mode());
    }

    #[test]
    fn test_quote_rejects_non_numeric_id() {
        assert!(Cli::try_parse_from(["skiphire", "quote", "six-yard"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["skiphire", "catalog", "--json", "--log-level", "debug"])
            .expect("parse");
        assert_eq!(cli.command, Some(Commands::Catalog { json: true }));
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
    }
}
