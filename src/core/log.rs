//! Narrative event log consumed by the presentation layer.
//!
//! The engine appends a tagged entry for every state-affecting action.
//! Only the most recent entries are retained; the engine itself never
//! reads the log back.

use im::Vector;
use serde::{Deserialize, Serialize};

/// Maximum number of retained log entries.
pub const LOG_CAPACITY: usize = 12;

/// Category of a log entry, used by the UI for styling only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogKind {
    Info,
    Damage,
    Heal,
    Important,
    Judgement,
    Skill,
}

/// A single narrative log entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub kind: LogKind,
    pub text: String,
}

/// Append-only, capped log stream.
///
/// Backed by a persistent `im::Vector` so snapshot clones are cheap.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GameLog {
    entries: Vector<LogEntry>,
}

impl GameLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, dropping the oldest beyond [`LOG_CAPACITY`].
    pub fn push(&mut self, kind: LogKind, text: impl Into<String>) {
        self.entries.push_back(LogEntry {
            kind,
            text: text.into(),
        });
        while self.entries.len() > LOG_CAPACITY {
            self.entries.pop_front();
        }
    }

    /// Iterate over retained entries, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// Most recent entry, if any.
    #[must_use]
    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    /// Number of retained entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
