//! Bounded history of evaluated expressions.

use serde::Serialize;
use std::collections::VecDeque;
use std::fmt;

/// Number of entries the history panel shows.
pub const DEFAULT_HISTORY_LIMIT: usize = 3;

/// One evaluated expression and its result text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    /// Expression exactly as it was in the buffer.
    pub expression: String,
    /// Canonical result text.
    pub result: String,
}

impl HistoryEntry {
    /// Creates an entry.
    #[must_use]
    pub fn new(expression: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            result: result.into(),
        }
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.expression, self.result)
    }
}

/// FIFO log holding at most `limit` entries.
///
/// Appending to a full log drops the oldest entry first. Entries are never
/// edited after they are recorded.
///
/// # Examples
///
/// ```
/// use deskcalc::core::{HistoryEntry, HistoryLog};
///
/// let mut log = HistoryLog::new(2);
/// log.push(HistoryEntry::new("1+1", "2"));
/// log.push(HistoryEntry::new("2+2", "4"));
/// log.push(HistoryEntry::new("3+3", "6"));
/// assert_eq!(log.render(), "2+2 = 4\n3+3 = 6");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryLog {
    entries: VecDeque<HistoryEntry>,
    #[serde(skip)]
    limit: usize,
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl HistoryLog {
    /// Creates an empty log. A zero limit is raised to one.
    #[must_use]
    pub fn new(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            entries: VecDeque::with_capacity(limit),
            limit,
        }
    }

    /// Appends an entry, returning the evicted one if the log was full.
    pub fn push(&mut self, entry: HistoryEntry) -> Option<HistoryEntry> {
        let evicted = if self.entries.len() >= self.limit {
            self.entries.pop_front()
        } else {
            None
        };
        self.entries.push_back(entry);
        evicted
    }

    /// Entries from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Number of entries held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Newline-joined `expr = result` lines, oldest first.
    #[must_use]
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
