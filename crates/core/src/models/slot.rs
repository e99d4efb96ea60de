use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Half-open `[start, end)` interval within a single day.
///
/// Times are zero-padded `HH:MM` or `HH:MM:SS` strings; the fixed-width
/// format makes lexicographic comparison agree with chronological order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: String,
    pub end: String,
}

impl TimeRange {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

/// A slot being tested for availability. Not persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateSlot {
    pub professional_id: Uuid,
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    pub time: TimeRange,
}
