//! Parser errors.

use super::shape::LineShape;

/// Errors that can occur while parsing a batch of log lines.
///
/// Malformed lines are never errors; they are dropped. This type only covers
/// lines that matched a shape but whose timestamp is not a real calendar
/// date-time, such as month 13 or day 32. Days 29 to 31 past the end of a
/// month are clamped instead, see [`super::resolve_timestamp`].
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("line {line}: {shape} line has an invalid timestamp '{value}': {source}")]
    InvalidTimestamp {
        /// 1-based line number within the parsed batch
        line: usize,
        shape: LineShape,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}
