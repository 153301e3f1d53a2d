//! Output formatting for CLI commands.
//!
//! Supports text and JSON output formats.

use crate::engine::{Button, KEYPAD, Snapshot};
use crate::error::{EngineError, Error};
use serde::Serialize;
use std::fmt::Write;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// State after a run of intents, with the errors raised along the way.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Final state.
    #[serde(flatten)]
    pub snapshot: Snapshot,
    /// Errors in the order they were raised.
    #[serde(serialize_with = "serialize_engine_errors")]
    pub errors: Vec<EngineError>,
}

/// Formats a report as rendered after each session line.
///
/// Text output is the history panel followed by the display; JSON output is
/// a single line so a session transcript reads as newline-delimited JSON.
#[must_use]
pub fn format_report(report: &Report, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format_report_text(report),
        OutputFormat::Json => {
            let mut line = serde_json::to_string(report).unwrap_or_else(|_| "{}".to_string());
            line.push('\n');
            line
        }
    }
}

fn format_report_text(report: &Report) -> String {
    let mut output = String::new();
    for error in &report.errors {
        let _ = writeln!(output, "Error: {}", error.message());
    }
    for line in &report.snapshot.history {
        let _ = writeln!(output, "  {line}");
    }
    let _ = writeln!(output, "> {}", report.snapshot.display);
    output
}

/// Formats the result of a one-shot evaluation.
#[must_use]
pub fn format_eval(expression: &str, snapshot: &Snapshot, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!("{}\n", snapshot.display),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct EvalOutput<'a> {
                expression: &'a str,
                result: &'a str,
            }
            format_json(&EvalOutput {
                expression,
                result: &snapshot.display,
            })
        }
    }
}

/// Formats the button grid.
#[must_use]
pub fn format_keypad(format: OutputFormat) -> String {
    let rows: Vec<Vec<&str>> = KEYPAD
        .iter()
        .map(|row| row.iter().copied().map(Button::label).collect())
        .collect();

    match format {
        OutputFormat::Text => {
            let mut output = String::new();
            for row in &rows {
                for label in row {
                    let _ = write!(output, "[{label:^4}]");
                }
                output.push('\n');
            }
            output
        }
        OutputFormat::Json => format_json(&rows),
    }
}

/// Formats an error for display.
///
/// Engine errors use the notification text the calculator shows. JSON
/// errors are a single line.
#[must_use]
pub fn format_error(error: &Error, format: OutputFormat) -> String {
    let (kind, message) = match error {
        Error::Engine(engine_error) => (engine_error.kind(), engine_error.message().to_string()),
        Error::Expression(_) => ("expression", error.to_string()),
        Error::Io(_) => ("io", error.to_string()),
        Error::Command(_) => ("command", error.to_string()),
        Error::Config { .. } => ("config", error.to_string()),
    };

    match format {
        OutputFormat::Text => message,
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct ErrorOutput<'a> {
                error: &'a str,
                message: &'a str,
            }
            serde_json::to_string(&ErrorOutput {
                error: kind,
                message: &message,
            })
            .unwrap_or_else(|_| "{}".to_string())
        }
    }
}

fn serialize_engine_errors<S>(errors: &[EngineError], serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    #[derive(Serialize)]
    struct ErrorEntry<'a> {
        kind: &'a str,
        message: &'a str,
    }
    serializer.collect_seq(errors.iter().map(|e| ErrorEntry {
        kind: e.kind(),
        message: e.message(),
    }))
}

/// Formats a value as JSON.
fn format_json<T: Serialize>(value: &T) -> String {
    let mut json = serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string());
    json.push('\n');
    json
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Number;
    use crate::error::CommandError;

    fn snapshot() -> Snapshot {
        Snapshot {
            display: "4".to_string(),
            history: vec!["1+1 = 2".to_string(), "2+2 = 4".to_string()],
            memory: Number::Integer(0),
        }
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::parse("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("JSON"), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("text"), OutputFormat::Text);
        assert_eq!(OutputFormat::parse("unknown"), OutputFormat::Text);
    }

    #[test]
    fn test_format_report_text() {
        let report = Report {
            snapshot: snapshot(),
            errors: vec![EngineError::DivideByZero],
        };
        let text = format_report(&report, OutputFormat::Text);
        assert_eq!(
            text,
            "Error: Cannot divide by zero!\n  1+1 = 2\n  2+2 = 4\n> 4\n"
        );
    }

    #[test]
    fn test_format_report_json_is_one_line() {
        let report = Report {
            snapshot: snapshot(),
            errors: vec![EngineError::InvalidInput],
        };
        let json = format_report(&report, OutputFormat::Json);
        assert_eq!(json.lines().count(), 1);
        assert!(json.contains(r#""display":"4""#));
        assert!(json.contains(r#""memory":0"#));
        assert!(json.contains(r#""kind":"invalid_input""#));
    }

    #[test]
    fn test_format_eval() {
        assert_eq!(format_eval("2+2", &snapshot(), OutputFormat::Text), "4\n");
        let json = format_eval("2+2", &snapshot(), OutputFormat::Json);
        assert!(json.contains("\"expression\": \"2+2\""));
        assert!(json.contains("\"result\": \"4\""));
    }

    #[test]
    fn test_format_keypad() {
        let text = format_keypad(OutputFormat::Text);
        assert_eq!(text.lines().count(), 8);
        assert!(text.starts_with("[ MC ][ MR ][ M+ ][ M- ]\n"));
        assert!(text.contains("[ ±  ]"));

        let json = format_keypad(OutputFormat::Json);
        assert!(json.contains("\"√\""));
    }

    #[test]
    fn test_format_error() {
        let err = Error::Engine(EngineError::DivideByZero);
        assert_eq!(format_error(&err, OutputFormat::Text), "Cannot divide by zero!");
        let json = format_error(&err, OutputFormat::Json);
        assert_eq!(
            json,
            r#"{"error":"divide_by_zero","message":"Cannot divide by zero!"}"#
        );

        let err = Error::Command(CommandError::UnknownButton("sin".to_string()));
        assert_eq!(
            format_error(&err, OutputFormat::Text),
            "command error: unknown button: sin"
        );
    }
}
