//! Script file reading.
//!
//! A script is a plain text file replayed by the session front end, one
//! line of button/key tokens at a time. Blank lines and lines starting with
//! `#` are skipped.

use crate::error::{IoError, Result};
use std::path::Path;

/// Maximum script size accepted (1MB).
const MAX_SCRIPT_SIZE: u64 = 1024 * 1024;

/// Reads a script file to string.
///
/// # Errors
///
/// Returns an error if the file doesn't exist, is too large, or is not
/// valid UTF-8.
///
/// # Examples
///
/// ```no_run
/// use deskcalc::io::read_script;
///
/// let script = read_script("keys.txt").unwrap();
/// ```
pub fn read_script<P: AsRef<Path>>(path: P) -> Result<String> {
    let path_ref = path.as_ref();
    let path_str = path_ref.to_string_lossy().to_string();

    if !path_ref.exists() {
        return Err(IoError::FileNotFound { path: path_str }.into());
    }

    let size = std::fs::metadata(path_ref)
        .map_err(|e| IoError::ReadFailed {
            path: path_str.clone(),
            reason: e.to_string(),
        })?
        .len();

    if size > MAX_SCRIPT_SIZE {
        return Err(IoError::ReadFailed {
            path: path_str,
            reason: format!("file too large: {size} bytes (max: {MAX_SCRIPT_SIZE} bytes)"),
        }
        .into());
    }

    std::fs::read_to_string(path_ref).map_err(|e| {
        IoError::ReadFailed {
            path: path_str,
            reason: e.to_string(),
        }
        .into()
    })
}

/// Lines of a script that carry tokens.
pub fn script_lines(script: &str) -> impl Iterator<Item = &str> {
    script
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}
