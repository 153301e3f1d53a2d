//! User intents and the keyboard mapping that produces them.

use serde::Serialize;

/// A discrete user action forwarded to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "intent", content = "token", rename_all = "snake_case")]
pub enum Intent {
    /// Append token text to the input buffer.
    Append(String),
    /// Empty the input buffer.
    Clear,
    /// Remove the last character.
    Backspace,
    /// Evaluate the buffer.
    Evaluate,
    /// Negate the buffer's value.
    Negate,
    /// Divide the buffer's value by 100.
    Percentage,
    /// Replace the buffer's value by its square root.
    SquareRoot,
    /// Reset the memory register.
    MemoryClear,
    /// Load the memory register into the buffer.
    MemoryRecall,
    /// Add the buffer's value to memory.
    MemoryAdd,
    /// Subtract the buffer's value from memory.
    MemorySubtract,
}

impl Intent {
    /// Convenience constructor for [`Intent::Append`].
    #[must_use]
    pub fn append(token: impl Into<String>) -> Self {
        Self::Append(token.into())
    }

    /// Translates a key press. Keys outside the mapping yield `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use deskcalc::engine::{Intent, Key};
    ///
    /// assert_eq!(Intent::from_key(Key::Char('7')), Some(Intent::append("7")));
    /// assert_eq!(Intent::from_key(Key::Enter), Some(Intent::Evaluate));
    /// assert_eq!(Intent::from_key(Key::Char('x')), None);
    /// ```
    #[must_use]
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Char(ch) if is_typeable(ch) => Some(Self::Append(ch.to_string())),
            Key::Char(_) => None,
            Key::Enter => Some(Self::Evaluate),
            Key::Backspace => Some(Self::Backspace),
            Key::Escape => Some(Self::Clear),
        }
    }
}

/// Keys the front end can capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A printable character.
    Char(char),
    /// Return / Enter.
    Enter,
    /// Backspace.
    Backspace,
    /// Escape.
    Escape,
}

/// Characters that type straight into the buffer.
#[must_use]
pub fn is_typeable(ch: char) -> bool {
    ch.is_ascii_digit() || "+-*/.()".contains(ch)
}
