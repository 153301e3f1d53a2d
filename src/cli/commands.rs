//! CLI command implementations.

use crate::cli::output::{OutputFormat, format_eval, format_keypad, format_report};
use crate::cli::parser::{Cli, Commands};
use crate::cli::session::{press, run_session};
use crate::engine::Engine;
use crate::error::{CommandError, Result};
use crate::io::{read_script, script_lines};
use std::io::{self, Write};
use std::path::Path;
use tracing::debug;

/// Executes the CLI command.
///
/// Returns the text to print. The interactive session writes to stdout as
/// it goes and returns an empty string.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the command fails, or
/// (for `eval`) the expression raises an engine error.
pub fn execute(cli: &Cli) -> Result<String> {
    let format = OutputFormat::parse(&cli.format);
    let mut engine = Engine::with_config(&cli.engine_config())?;

    match &cli.command {
        None => cmd_session(&mut engine, None, format),
        Some(Commands::Session { script }) => cmd_session(&mut engine, script.as_deref(), format),
        Some(Commands::Eval { expression }) => cmd_eval(&mut engine, expression, format),
        Some(Commands::Press { tokens }) => cmd_press(&mut engine, tokens, format),
        Some(Commands::Buttons) => Ok(format_keypad(format)),
    }
}

// ==================== Command Implementations ====================

fn cmd_session(engine: &mut Engine, script: Option<&Path>, format: OutputFormat) -> Result<String> {
    if let Some(path) = script {
        let content = read_script(path)?;
        let lines: Vec<&str> = script_lines(&content).collect();
        debug!(path = %path.display(), lines = lines.len(), "replaying script");
        let joined = lines.join("\n");
        let mut output = Vec::new();
        run_session(engine, joined.as_bytes(), &mut output, format)?;
        return String::from_utf8(output)
            .map_err(|e| CommandError::ExecutionFailed(e.to_string()).into());
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let processed = run_session(engine, stdin.lock(), &mut stdout, format)?;
    stdout.flush()?;
    debug!(processed, "session finished");
    Ok(String::new())
}

fn cmd_eval(engine: &mut Engine, expression: &str, format: OutputFormat) -> Result<String> {
    engine.append(expression);
    engine.evaluate()?;
    Ok(format_eval(expression, &engine.snapshot(), format))
}

fn cmd_press(engine: &mut Engine, tokens: &[String], format: OutputFormat) -> Result<String> {
    let report = press(engine, tokens)?;
    Ok(format_report(&report, format))
}
