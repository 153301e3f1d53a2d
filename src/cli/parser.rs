//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use crate::core::DEFAULT_HISTORY_LIMIT;
use crate::engine::EngineConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// deskcalc: a desktop-style calculator for the terminal.
///
/// Type digits and operators, press buttons by name (mc, mr, m+, m-, c,
/// bs, neg, %, sqrt, =) and watch the display and history panel update.
#[derive(Parser, Debug)]
#[command(name = "deskcalc")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Number of entries the history panel keeps.
    #[arg(
        long,
        env = "DESKCALC_HISTORY_LIMIT",
        default_value_t = DEFAULT_HISTORY_LIMIT,
        global = true
    )]
    pub history_limit: usize,

    /// Enable verbose (debug) logging on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json).
    #[arg(long, default_value = "text", global = true)]
    pub format: String,

    /// The subcommand to execute (defaults to an interactive session).
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run an interactive calculator session on stdin.
    ///
    /// Each line holds whitespace-separated tokens: button names press
    /// that button, anything else is typed key by key.
    Session {
        /// Replay a script file instead of reading stdin.
        #[arg(short, long)]
        script: Option<PathBuf>,
    },

    /// Evaluate a single expression.
    Eval {
        /// Expression to evaluate, e.g. "(2+3)*4".
        #[arg(allow_hyphen_values = true)]
        expression: String,
    },

    /// Press a sequence of buttons and keys, then show the final state.
    Press {
        /// Button names or key runs, e.g. `12+30 = m+ c mr`.
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        tokens: Vec<String>,
    },

    /// Show the button grid.
    Buttons,
}

impl Cli {
    /// Engine settings derived from the flags.
    #[must_use]
    pub const fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            history_limit: self.history_limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_history_limit() {
        let cli = Cli {
            history_limit: DEFAULT_HISTORY_LIMIT,
            verbose: false,
            format: "text".to_string(),
            command: None,
        };
        assert_eq!(cli.engine_config(), EngineConfig::default());
    }

    #[test]
    fn test_parse_press_with_hyphen_tokens() {
        let cli = Cli::try_parse_from(["deskcalc", "press", "5", "m-", "-3"]);
        let Ok(cli) = cli else {
            unreachable!("press tokens should parse");
        };
        match cli.command {
            Some(Commands::Press { tokens }) => assert_eq!(tokens, vec!["5", "m-", "-3"]),
            other => unreachable!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_eval_negative_expression() {
        let cli = Cli::try_parse_from(["deskcalc", "--format", "json", "eval", "-2**2"]);
        assert!(matches!(
            cli.map(|c| c.command),
            Ok(Some(Commands::Eval { expression })) if expression == "-2**2"
        ));
    }

    #[test]
    fn test_custom_history_limit() {
        let cli = Cli::try_parse_from(["deskcalc", "--history-limit", "5", "buttons"]);
        assert!(matches!(cli, Ok(c) if c.engine_config().history_limit == 5));
    }
}
