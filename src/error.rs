//! Error types for deskcalc operations.
//!
//! This module provides the error hierarchy using `thiserror` for the
//! calculator engine, the expression evaluator, script I/O and CLI commands.

use thiserror::Error;

/// Result type alias for deskcalc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Crate-level error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Calculator engine errors (user-visible).
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),

    /// Expression lexing, parsing and evaluation errors.
    ///
    /// Only raised by library callers that convert [`ExprError`] directly;
    /// the engine turns expression failures into [`EngineError`].
    #[error("expression error: {0}")]
    Expression(#[from] ExprError),

    /// I/O errors (script files, terminal).
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    /// CLI command errors.
    #[error("command error: {0}")]
    Command(#[from] CommandError),

    /// Configuration errors.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },
}

/// Errors the engine reports to the user.
///
/// Every variant corresponds to a blocking error notification; the engine
/// has already cleared its input buffer by the time one is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Division by zero, either detected textually or during evaluation.
    #[error("division by zero")]
    DivideByZero,

    /// The input buffer is not a valid arithmetic expression.
    #[error("invalid expression: {reason}")]
    InvalidExpression {
        /// What the evaluator rejected.
        reason: String,
    },

    /// Square root of a negative or non-numeric value.
    #[error("invalid input for square root")]
    InvalidInput,
}

impl EngineError {
    /// Returns the message shown in the error notification.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::DivideByZero => "Cannot divide by zero!",
            Self::InvalidExpression { .. } => "Invalid Expression!",
            Self::InvalidInput => "Invalid input for square root!",
        }
    }

    /// Short machine-readable name of the error kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::DivideByZero => "divide_by_zero",
            Self::InvalidExpression { .. } => "invalid_expression",
            Self::InvalidInput => "invalid_input",
        }
    }
}

/// Expression errors with the byte position they were detected at.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExprError {
    /// Character that cannot start any token.
    #[error("unexpected character '{ch}' at {pos}")]
    UnexpectedChar {
        /// Offending character.
        ch: char,
        /// Byte offset.
        pos: usize,
    },

    /// Number literal that does not parse.
    #[error("malformed number '{text}' at {pos}")]
    MalformedNumber {
        /// Literal text.
        text: String,
        /// Byte offset.
        pos: usize,
    },

    /// Integer literal with a leading zero, such as `03`.
    #[error("leading zeros in integer literal '{text}' at {pos}")]
    LeadingZero {
        /// Literal text.
        text: String,
        /// Byte offset.
        pos: usize,
    },

    /// Token that is not valid where it appears.
    #[error("unexpected '{token}' at {pos}")]
    UnexpectedToken {
        /// Token text.
        token: String,
        /// Byte offset.
        pos: usize,
    },

    /// Input ended while an operand was expected.
    #[error("unexpected end of expression")]
    UnexpectedEnd,

    /// Opening parenthesis without a matching close.
    #[error("unbalanced parenthesis at {pos}")]
    UnbalancedParen {
        /// Byte offset of the unmatched parenthesis.
        pos: usize,
    },

    /// Groups, signs or operator chains nested past the parser's limits.
    #[error("expression nested too deeply at {pos}")]
    TooDeep {
        /// Byte offset of the token that went too deep.
        pos: usize,
    },

    /// Divisor evaluated to zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Result too large to represent.
    #[error("numeric result out of range")]
    Overflow,

    /// Operation has no real-valued result.
    #[error("result is not a real number")]
    NoRealResult,
}

impl From<ExprError> for EngineError {
    fn from(err: ExprError) -> Self {
        match err {
            ExprError::DivisionByZero => Self::DivideByZero,
            other => Self::InvalidExpression {
                reason: other.to_string(),
            },
        }
    }
}

/// I/O-specific errors.
#[derive(Error, Debug)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path to the file that was not found.
        path: String,
    },

    /// Failed to read file.
    #[error("failed to read file: {path}: {reason}")]
    ReadFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Generic I/O error wrapper.
    #[error("I/O error: {0}")]
    Generic(String),
}

/// CLI command-specific errors.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Token that is neither a button nor typeable keys.
    #[error("unknown button: {0}")]
    UnknownButton(String),

    /// Command execution failed.
    #[error("command execution failed: {0}")]
    ExecutionFailed(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(IoError::Generic(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_error_messages() {
        assert_eq!(EngineError::DivideByZero.message(), "Cannot divide by zero!");
        assert_eq!(
            EngineError::InvalidExpression {
                reason: "x".to_string()
            }
            .message(),
            "Invalid Expression!"
        );
        assert_eq!(
            EngineError::InvalidInput.message(),
            "Invalid input for square root!"
        );
    }

    #[test]
    fn test_engine_error_display() {
        let err = EngineError::InvalidExpression {
            reason: "unexpected '*' at 2".to_string(),
        };
        assert_eq!(err.to_string(), "invalid expression: unexpected '*' at 2");
        assert_eq!(err.kind(), "invalid_expression");
    }

    #[test]
    fn test_expr_error_display() {
        let err = ExprError::UnexpectedChar { ch: 'x', pos: 3 };
        assert_eq!(err.to_string(), "unexpected character 'x' at 3");

        let err = ExprError::LeadingZero {
            text: "03".to_string(),
            pos: 3,
        };
        assert!(err.to_string().contains("leading zeros"));

        assert_eq!(ExprError::UnexpectedEnd.to_string(), "unexpected end of expression");
    }

    #[test]
    fn test_division_by_zero_maps_to_divide_by_zero() {
        let err: EngineError = ExprError::DivisionByZero.into();
        assert_eq!(err, EngineError::DivideByZero);
    }

    #[test]
    fn test_other_expr_errors_map_to_invalid_expression() {
        let err: EngineError = ExprError::UnbalancedParen { pos: 0 }.into();
        assert!(matches!(err, EngineError::InvalidExpression { .. }));

        let err: EngineError = ExprError::Overflow.into();
        assert!(matches!(err, EngineError::InvalidExpression { .. }));

        let err: EngineError = ExprError::TooDeep { pos: 200 }.into();
        assert_eq!(err.message(), "Invalid Expression!");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_from_engine() {
        let err: Error = EngineError::InvalidInput.into();
        assert!(matches!(err, Error::Engine(EngineError::InvalidInput)));
        assert_eq!(err.to_string(), "engine error: invalid input for square root");
    }

    #[test]
    fn test_error_config() {
        let err = Error::Config {
            message: "history limit must be at least 1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "configuration error: history limit must be at least 1"
        );
    }

    #[test]
    fn test_command_error_variants() {
        let err = CommandError::UnknownButton("foo".to_string());
        assert!(err.to_string().contains("unknown button"));

        let err = CommandError::ExecutionFailed("stdin closed".to_string());
        assert!(err.to_string().contains("execution failed"));
    }

    #[test]
    fn test_io_error_variants() {
        let err = IoError::FileNotFound {
            path: "/tmp/keys.txt".to_string(),
        };
        assert_eq!(err.to_string(), "file not found: /tmp/keys.txt");

        let err = IoError::ReadFailed {
            path: "/tmp/keys.txt".to_string(),
            reason: "permission denied".to_string(),
        };
        assert!(err.to_string().contains("permission denied"));
    }
}
