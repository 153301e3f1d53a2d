//! I/O utilities for deskcalc.
//!
//! Reads key scripts for the session front end.

pub mod reader;

pub use reader::{read_script, script_lines};
