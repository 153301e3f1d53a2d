//! CLI layer for deskcalc.
//!
//! Provides the command-line interface using clap: an interactive session
//! that stands in for the calculator window, plus one-shot commands.

pub mod commands;
pub mod output;
pub mod parser;
pub mod session;

pub use commands::execute;
pub use output::OutputFormat;
pub use parser::{Cli, Commands};
