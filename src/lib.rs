//! # deskcalc
//!
//! A desktop-style calculator engine with a terminal front end.
//!
//! The [`Engine`] owns an input buffer, a bounded history log and a memory
//! register. Front ends forward user intents (button and key presses) to it
//! and render the snapshot it returns, so the whole calculator can be driven
//! and tested without any window.
//!
//! ## Features
//!
//! - **Closed arithmetic grammar**: numbers, `+ - * / // **`, unary signs
//!   and parentheses, evaluated by a recursive-descent parser
//! - **Integer and float values**: integers stay exact until they overflow
//! - **Bounded history**: the last three `expr = result` lines
//! - **Memory register**: MC, MR, M+ and M-

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod core;
pub mod engine;
pub mod error;
pub mod expr;
pub mod io;

// Re-export commonly used types at crate root
pub use error::{EngineError, Error, ExprError, Result};

// Re-export core domain types
pub use core::{HistoryEntry, HistoryLog, InputBuffer, MemoryRegister, Number};

// Re-export engine types
pub use engine::{Button, Engine, EngineConfig, Intent, Key, Outcome, Snapshot};

// Re-export CLI types
pub use cli::{Cli, Commands, OutputFormat};
