//! The calculator engine.
//!
//! [`Engine`] owns the input buffer, the history log and the memory
//! register. A front end forwards [`Intent`]s to it and renders the
//! [`Snapshot`] that comes back; the engine never touches a display itself.
//!
//! Every intent runs to completion before the next one is accepted. Errors
//! are handled where they arise: the failing operation clears the buffer and
//! the error is handed back alongside the new snapshot so the front end can
//! show a notification.

pub mod intent;
pub mod keypad;

pub use intent::{Intent, Key, is_typeable};
pub use keypad::{Button, KEYPAD};

use crate::core::{
    DEFAULT_HISTORY_LIMIT, HistoryEntry, HistoryLog, InputBuffer, MemoryRegister, Number,
};
use crate::error::{EngineError, Error, Result};
use crate::expr;
use serde::Serialize;
use tracing::{debug, trace};

/// Engine settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Maximum number of history entries kept.
    pub history_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl EngineConfig {
    /// Sets the history limit.
    #[must_use]
    pub const fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Checks that the settings are usable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the history limit is zero.
    pub fn validate(&self) -> Result<()> {
        if self.history_limit == 0 {
            return Err(Error::Config {
                message: "history limit must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// What a front end renders after an intent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    /// Main display text (the input buffer).
    pub display: String,
    /// History panel lines, oldest first.
    pub history: Vec<String>,
    /// Memory register value.
    pub memory: Number,
}

/// Result of dispatching one intent.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// State after the intent.
    pub snapshot: Snapshot,
    /// Error to notify the user of, if the intent failed.
    pub error: Option<EngineError>,
}

impl Outcome {
    /// Returns `true` if the intent raised an error.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Calculator state and the operations that change it.
///
/// # Examples
///
/// ```
/// use deskcalc::engine::Engine;
///
/// let mut engine = Engine::new();
/// engine.append("2");
/// engine.append("*");
/// engine.append("21");
/// engine.evaluate().unwrap();
/// assert_eq!(engine.display(), "42");
/// assert_eq!(engine.history_text(), "2*21 = 42");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Engine {
    buffer: InputBuffer,
    history: HistoryLog,
    memory: MemoryRegister,
}

impl Engine {
    /// Creates an engine with the default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with custom settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `config` does not validate.
    pub fn with_config(config: &EngineConfig) -> Result<Self> {
        config.validate()?;
        let history = HistoryLog::new(config.history_limit);
        debug!(history_limit = history.limit(), "engine configured");
        Ok(Self {
            history,
            ..Self::default()
        })
    }

    /// Appends a digit, point, operator or parenthesis. Never validates.
    pub fn append(&mut self, token: &str) {
        self.buffer.push_str(token);
    }

    /// Empties the input buffer.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Removes the last character; no-op when the buffer is empty.
    pub fn backspace(&mut self) {
        self.buffer.backspace();
    }

    /// Evaluates the buffer.
    ///
    /// A buffer containing `/0` but no `/0.` anywhere is rejected as a
    /// division by zero without being evaluated. On success the result
    /// replaces the buffer and `"<expr> = <result>"` is recorded in the
    /// history. On failure the buffer is cleared.
    ///
    /// # Errors
    ///
    /// [`EngineError::DivideByZero`] for the textual check or a zero
    /// divisor, [`EngineError::InvalidExpression`] for anything else.
    pub fn evaluate(&mut self) -> std::result::Result<Number, EngineError> {
        let expression = self.buffer.as_str().to_string();
        match evaluate_text(&expression) {
            Ok(value) => {
                let result = value.to_string();
                debug!(%expression, %result, "evaluated");
                if let Some(evicted) = self.history.push(HistoryEntry::new(expression, &*result)) {
                    trace!(%evicted, "history entry evicted");
                }
                self.buffer.replace(result);
                Ok(value)
            }
            Err(err) => {
                debug!(%expression, error = %err, "evaluation failed");
                self.buffer.clear();
                Err(err)
            }
        }
    }

    /// Negates the buffer's value. Non-numeric buffers are left alone.
    pub fn negate(&mut self) {
        self.map_value(Number::negate);
    }

    /// Divides the buffer's value by 100. Non-numeric buffers are left alone.
    pub fn percentage(&mut self) {
        self.map_value(|v| Number::Float(v.as_f64() / 100.0));
    }

    /// Replaces the buffer's value by its square root.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidInput`] if the buffer is negative or not a
    /// number; the buffer is cleared in that case.
    pub fn square_root(&mut self) -> std::result::Result<Number, EngineError> {
        match self.buffer_value() {
            Some(value) if value.as_f64() >= 0.0 || value.as_f64().is_nan() => {
                let root = value.sqrt();
                self.buffer.replace(root.to_string());
                Ok(root)
            }
            _ => {
                debug!(buffer = %self.buffer, "square root rejected");
                self.buffer.clear();
                Err(EngineError::InvalidInput)
            }
        }
    }

    /// Resets the memory register to zero.
    pub fn memory_clear(&mut self) {
        self.memory.clear();
    }

    /// Replaces the buffer with the memory register's value.
    pub fn memory_recall(&mut self) {
        self.buffer.replace(self.memory.recall_text());
    }

    /// Adds the buffer's value to memory. Non-numeric buffers are ignored.
    pub fn memory_add(&mut self) {
        if let Some(value) = self.buffer_value() {
            self.memory.add(value);
        }
    }

    /// Subtracts the buffer's value from memory. Non-numeric buffers are
    /// ignored.
    pub fn memory_subtract(&mut self) {
        if let Some(value) = self.buffer_value() {
            self.memory.subtract(value);
        }
    }

    /// Runs one intent and returns the state to render.
    pub fn dispatch(&mut self, intent: &Intent) -> Outcome {
        trace!(?intent, "dispatch");
        let error = match intent {
            Intent::Append(token) => {
                self.append(token);
                None
            }
            Intent::Clear => {
                self.clear();
                None
            }
            Intent::Backspace => {
                self.backspace();
                None
            }
            Intent::Evaluate => self.evaluate().err(),
            Intent::Negate => {
                self.negate();
                None
            }
            Intent::Percentage => {
                self.percentage();
                None
            }
            Intent::SquareRoot => self.square_root().err(),
            Intent::MemoryClear => {
                self.memory_clear();
                None
            }
            Intent::MemoryRecall => {
                self.memory_recall();
                None
            }
            Intent::MemoryAdd => {
                self.memory_add();
                None
            }
            Intent::MemorySubtract => {
                self.memory_subtract();
                None
            }
        };
        Outcome {
            snapshot: self.snapshot(),
            error,
        }
    }

    /// Current display text.
    #[must_use]
    pub fn display(&self) -> &str {
        self.buffer.as_str()
    }

    /// History panel text, oldest entry first.
    #[must_use]
    pub fn history_text(&self) -> String {
        self.history.render()
    }

    /// The history log.
    #[must_use]
    pub const fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// The memory register.
    #[must_use]
    pub const fn memory(&self) -> &MemoryRegister {
        &self.memory
    }

    /// Render-ready copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            display: self.buffer.to_string(),
            history: self.history.iter().map(ToString::to_string).collect(),
            memory: self.memory.value(),
        }
    }

    fn buffer_value(&self) -> Option<Number> {
        Number::parse_float(self.buffer.as_str())
    }

    fn map_value(&mut self, f: impl FnOnce(Number) -> Number) {
        match self.buffer_value() {
            Some(value) => self.buffer.replace(f(value).to_string()),
            None => trace!(buffer = %self.buffer, "not a number, ignored"),
        }
    }
}

/// Returns `true` when the textual divide-by-zero check fires.
///
/// This is a substring test, not arithmetic: it fires on `10/03` and misses
/// `6/(3-3)`. Any `/0.` in the text disarms it for the whole expression.
#[must_use]
pub fn looks_like_division_by_zero(expression: &str) -> bool {
    expression.contains("/0") && !expression.contains("/0.")
}

fn evaluate_text(expression: &str) -> std::result::Result<Number, EngineError> {
    if looks_like_division_by_zero(expression) {
        return Err(EngineError::DivideByZero);
    }
    Ok(expr::evaluate(expression)?)
}
