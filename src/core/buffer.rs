//! Input buffer for the calculator display.
//!
//! The buffer holds the expression text the user is editing. It performs no
//! validation: anything may be appended and errors only surface when the
//! engine evaluates it.

use serde::Serialize;

/// The not-yet-evaluated expression text.
///
/// # Examples
///
/// ```
/// use deskcalc::core::InputBuffer;
///
/// let mut buffer = InputBuffer::new();
/// buffer.push_str("12+");
/// buffer.backspace();
/// assert_eq!(buffer.as_str(), "12");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct InputBuffer {
    text: String,
}

impl InputBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    /// Appends token text at the end.
    pub fn push_str(&mut self, token: &str) {
        self.text.push_str(token);
    }

    /// Removes the last character. Returns it, or `None` when empty.
    pub fn backspace(&mut self) -> Option<char> {
        self.text.pop()
    }

    /// Empties the buffer.
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Replaces the whole content.
    pub fn replace(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Current text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns `true` if the buffer holds no text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl std::fmt::Display for InputBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
