//! Core domain models for deskcalc.
//!
//! The three pieces of calculator state (input buffer, history log and
//! memory register) plus the [`Number`] value type they share. These are
//! pure data types with no I/O.

pub mod buffer;
pub mod history;
pub mod memory;
pub mod number;

pub use buffer::InputBuffer;
pub use history::{DEFAULT_HISTORY_LIMIT, HistoryEntry, HistoryLog};
pub use memory::MemoryRegister;
pub use number::Number;
