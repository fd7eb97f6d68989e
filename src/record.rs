//! Request record extracted from a single log line

use chrono::NaiveDateTime;

/// A single logged request.
///
/// Records are only produced by the parser from lines that matched a known
/// line shape in full, and are never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    timestamp: NaiveDateTime,
    resource_name: String,
    duration_millis: u64,
}

impl Record {
    /// Create a new record.
    pub fn new(
        timestamp: NaiveDateTime,
        resource_name: impl Into<String>,
        duration_millis: u64,
    ) -> Self {
        Self {
            timestamp,
            resource_name: resource_name.into(),
            duration_millis,
        }
    }

    /// When the request was logged (naive local time, millisecond precision).
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Resource token or `action=` value the request was made against.
    pub fn resource_name(&self) -> &str {
        &self.resource_name
    }

    /// Request duration in milliseconds.
    pub fn duration_millis(&self) -> u64 {
        self.duration_millis
    }
}
