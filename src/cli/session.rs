//! Terminal front end for the engine.
//!
//! Plays the role of the calculator window: it turns typed tokens into
//! intents, forwards them to the [`Engine`] and renders what comes back.

use crate::cli::output::{OutputFormat, Report, format_error, format_report};
use crate::engine::{Button, Engine, Intent, Key};
use crate::error::{CommandError, Error, Result};
use std::io::{BufRead, Write};
use tracing::debug;

/// Words that end an interactive session.
const QUIT_WORDS: &[&str] = &["quit", "exit"];

/// Resolves one whitespace-free token into intents.
///
/// Button names and aliases press that button. Any other token is typed
/// key by key through the keyboard mapping, with `=` standing in for Enter.
///
/// # Errors
///
/// [`CommandError::UnknownButton`] if the token contains a character the
/// keyboard mapping ignores.
///
/// # Examples
///
/// ```
/// use deskcalc::cli::session::resolve_token;
/// use deskcalc::engine::Intent;
///
/// let intents = resolve_token("2+3=").unwrap();
/// assert_eq!(intents.len(), 4);
/// assert_eq!(intents[3], Intent::Evaluate);
/// assert_eq!(resolve_token("sqrt").unwrap(), vec![Intent::SquareRoot]);
/// ```
pub fn resolve_token(token: &str) -> Result<Vec<Intent>> {
    if let Some(button) = Button::from_label(token) {
        return Ok(vec![button.intent()]);
    }

    token
        .chars()
        .map(|ch| {
            let key = if ch == '=' { Key::Enter } else { Key::Char(ch) };
            Intent::from_key(key)
                .ok_or_else(|| Error::from(CommandError::UnknownButton(token.to_string())))
        })
        .collect()
}

/// Presses every token in order and reports the resulting state.
///
/// All tokens are resolved before any is dispatched, so an unknown token
/// leaves the engine untouched.
///
/// # Errors
///
/// Returns an error if any token cannot be resolved.
pub fn press<S: AsRef<str>>(engine: &mut Engine, tokens: &[S]) -> Result<Report> {
    let mut intents = Vec::new();
    for token in tokens {
        intents.extend(resolve_token(token.as_ref())?);
    }

    let mut errors = Vec::new();
    for intent in &intents {
        if let Some(error) = engine.dispatch(intent).error {
            errors.push(error);
        }
    }

    Ok(Report {
        snapshot: engine.snapshot(),
        errors,
    })
}

/// Runs a line-oriented session until `quit`, `exit` or end of input.
///
/// Each non-empty line is split on whitespace and pressed; the report is
/// written after every line. Unknown tokens are reported and the line is
/// skipped. Returns the number of lines processed.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_session<R, W>(
    engine: &mut Engine,
    input: R,
    output: &mut W,
    format: OutputFormat,
) -> Result<usize>
where
    R: BufRead,
    W: Write,
{
    let mut processed = 0;

    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if QUIT_WORDS.contains(&trimmed.to_lowercase().as_str()) {
            debug!("session ended by user");
            break;
        }

        let tokens: Vec<&str> = trimmed.split_whitespace().collect();
        match press(engine, &tokens) {
            Ok(report) => output.write_all(format_report(&report, format).as_bytes())?,
            Err(err) => {
                debug!(line = trimmed, error = %err, "line rejected");
                let mut message = format_error(&err, format);
                if format == OutputFormat::Text {
                    message = format!("Error: {message}");
                }
                writeln!(output, "{}", message.trim_end())?;
            }
        }
        output.flush()?;
        processed += 1;
    }

    Ok(processed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    fn run(script: &str) -> String {
        let mut engine = Engine::new();
        let mut output = Vec::new();
        let result = run_session(&mut engine, script.as_bytes(), &mut output, OutputFormat::Text);
        assert!(result.is_ok());
        String::from_utf8(output).unwrap_or_default()
    }

    #[test]
    fn test_resolve_button_names() {
        assert_eq!(resolve_token("MC").ok(), Some(vec![Intent::MemoryClear]));
        assert_eq!(resolve_token("bs").ok(), Some(vec![Intent::Backspace]));
        assert_eq!(resolve_token("÷").ok(), Some(vec![Intent::append("/")]));
    }

    #[test]
    fn test_resolve_key_run() {
        assert_eq!(
            resolve_token("(1)").ok(),
            Some(vec![
                Intent::append("("),
                Intent::append("1"),
                Intent::append(")"),
            ])
        );
    }

    #[test]
    fn test_resolve_unknown_token() {
        assert!(matches!(
            resolve_token("2x"),
            Err(Error::Command(CommandError::UnknownButton(t))) if t == "2x"
        ));
    }

    #[test]
    fn test_press_collects_errors() {
        let mut engine = Engine::new();
        let report = press(&mut engine, &["5/0", "=", "9", "neg", "sqrt"]);
        let Ok(report) = report else {
            unreachable!("tokens resolve");
        };
        assert_eq!(
            report.errors,
            vec![EngineError::DivideByZero, EngineError::InvalidInput]
        );
        assert_eq!(report.snapshot.display, "");
    }

    #[test]
    fn test_press_unknown_token_leaves_engine_untouched() {
        let mut engine = Engine::new();
        assert!(press(&mut engine, &["12", "foo"]).is_err());
        assert_eq!(engine.display(), "");
    }

    #[test]
    fn test_session_renders_each_line() {
        let output = run("1+1=\nc 2*3 =\n");
        assert_eq!(output, "  1+1 = 2\n> 2\n  1+1 = 2\n  2*3 = 6\n> 6\n");
    }

    #[test]
    fn test_session_reports_errors_and_continues() {
        let output = run("3+*2=\nfoo\n4\n");
        assert_eq!(
            output,
            "Error: Invalid Expression!\n> \nError: command error: unknown button: foo\n> 4\n"
        );
    }

    #[test]
    fn test_session_stops_at_quit() {
        let output = run("1\nquit\n2\n");
        assert_eq!(output, "> 1\n");
    }

    #[test]
    fn test_session_json_lines() {
        let mut engine = Engine::new();
        let mut output = Vec::new();
        let processed = run_session(
            &mut engine,
            "5 m+\nmr\n".as_bytes(),
            &mut output,
            OutputFormat::Json,
        );
        assert_eq!(processed.ok(), Some(2));
        let text = String::from_utf8(output).unwrap_or_default();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains(r#""display":"5.0""#));
    }
}
