//! Memory register (the MC / MR / M+ / M- buttons).

use crate::core::Number;
use serde::Serialize;

/// Single numeric scratch value, independent of the input buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MemoryRegister {
    value: Number,
}

impl MemoryRegister {
    /// Creates a register holding integer zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value.
    #[must_use]
    pub const fn value(&self) -> Number {
        self.value
    }

    /// Resets to integer zero.
    pub fn clear(&mut self) {
        self.value = Number::default();
    }

    /// Adds `amount` to the register.
    pub fn add(&mut self, amount: Number) {
        self.value = self.value.add(amount);
    }

    /// Subtracts `amount` from the register.
    pub fn subtract(&mut self, amount: Number) {
        self.value = self.value.sub(amount);
    }

    /// Text the register recalls into the display.
    #[must_use]
    pub fn recall_text(&self) -> String {
        self.value.to_string()
    }
}
