//! Log line parser.
//!
//! Turns raw log lines into [`Record`]s. Parsing is best-effort: a line that
//! does not match any [`LineShape`] is dropped and never aborts the batch.
//!
//! # Example
//!
//! ```
//! let lines = [
//!     "2015-08-19 00:06:42,375 (http-1) [] updateSubscriptionFromBackend 300109921258 in 243",
//!     "garbage",
//!     "2015-08-19 05:06:39,679 (http-2) [USER:3004] /mobilityServices.do?action=SERVICES in 46",
//! ];
//!
//! let records = logstat::parser::parse(lines)?;
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[0].resource_name(), "updateSubscriptionFromBackend");
//! assert_eq!(records[1].resource_name(), "SERVICES");
//! # Ok::<(), logstat::parser::ParseError>(())
//! ```

mod error;
mod shape;

pub use error::ParseError;
pub use shape::{Extraction, LineShape};

use chrono::format::ParseErrorKind;
use chrono::{NaiveDate, NaiveDateTime};
use tracing::{trace, warn};

use crate::record::Record;

/// chrono format of the timestamp prefix (`yyyy-MM-dd HH:mm:ss,SSS`).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Line parser holding the shapes it tries, in priority order.
///
/// The free functions [`parse`], [`parse_optional`] and [`parse_line`] use the
/// default parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogParser {
    shapes: Vec<LineShape>,
}

impl Default for LogParser {
    fn default() -> Self {
        Self::new()
    }
}

impl LogParser {
    /// Parser trying every [`LineShape`] in [`LineShape::ALL`] order.
    pub fn new() -> Self {
        Self {
            shapes: LineShape::ALL.to_vec(),
        }
    }

    /// Shapes in the order they are tried.
    pub fn shapes(&self) -> &[LineShape] {
        &self.shapes
    }

    /// Parse a batch of lines, keeping source order.
    ///
    /// Lines that match no shape are skipped. The only error is a line whose
    /// timestamp matched the shape pattern but is not a real date-time.
    pub fn parse<I>(&self, lines: I) -> Result<Vec<Record>, ParseError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.parse_optional(lines.into_iter().map(Some))
    }

    /// Parse a batch where some lines may be absent.
    ///
    /// Absent lines are skipped like empty ones but still count towards line
    /// numbers in errors.
    pub fn parse_optional<I, S>(&self, lines: I) -> Result<Vec<Record>, ParseError>
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        let mut records = Vec::new();
        for (index, line) in lines.into_iter().enumerate() {
            let Some(line) = line else { continue };
            if let Some(record) = self.parse_numbered(index + 1, line.as_ref())? {
                records.push(record);
            }
        }
        Ok(records)
    }

    /// Parse a single line.
    ///
    /// Returns `Ok(None)` for lines that match no shape.
    pub fn parse_line(&self, line: &str) -> Result<Option<Record>, ParseError> {
        self.parse_numbered(1, line)
    }

    fn classify<'a>(&self, line: &'a str) -> Option<Extraction<'a>> {
        self.shapes.iter().find_map(|shape| shape.extract(line))
    }

    fn parse_numbered(&self, number: usize, line: &str) -> Result<Option<Record>, ParseError> {
        if line.is_empty() {
            return Ok(None);
        }

        let Some(extraction) = self.classify(line) else {
            trace!(line = number, "skipping unrecognized line");
            return Ok(None);
        };

        let timestamp = resolve_timestamp(extraction.timestamp).map_err(|source| {
            ParseError::InvalidTimestamp {
                line: number,
                shape: extraction.shape,
                value: extraction.timestamp.to_string(),
                source,
            }
        })?;

        // Digits only, so the sole failure is overflow.
        let duration = match extraction.duration.parse::<u64>() {
            Ok(duration) => duration,
            Err(_) => {
                warn!(
                    line = number,
                    duration = extraction.duration,
                    "skipping line with out of range duration"
                );
                return Ok(None);
            }
        };

        Ok(Some(Record::new(timestamp, extraction.resource, duration)))
    }
}

/// Parse a timestamp in [`TIMESTAMP_FORMAT`].
///
/// A day of month from 29 to 31 that the month does not have resolves to the
/// month's last day, so `2015-02-30` reads as `2015-02-28`. Any other out of
/// range field, such as month 13 or day 32, is an error.
pub fn resolve_timestamp(value: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    let err = match NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT) {
        Ok(timestamp) => return Ok(timestamp),
        Err(err) => err,
    };
    if err.kind() != ParseErrorKind::OutOfRange {
        return Err(err);
    }
    clamp_day_of_month(value).ok_or(err)
}

fn clamp_day_of_month(value: &str) -> Option<NaiveDateTime> {
    // yyyy-MM-dd HH:mm:ss,SSS
    let field = |range: std::ops::Range<usize>| value.get(range)?.parse::<u32>().ok();
    let year = i32::try_from(field(0..4)?).ok()?;
    let month = field(5..7)?;
    let day = field(8..10)?;
    if !(29..=31).contains(&day) {
        return None;
    }

    let date = (28..day)
        .rev()
        .find_map(|last| NaiveDate::from_ymd_opt(year, month, last))?;
    date.and_hms_milli_opt(field(11..13)?, field(14..16)?, field(17..19)?, field(20..23)?)
}

/// Parse a batch of lines with the default [`LogParser`].
pub fn parse<I>(lines: I) -> Result<Vec<Record>, ParseError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    LogParser::new().parse(lines)
}

/// Parse a batch of possibly absent lines with the default [`LogParser`].
pub fn parse_optional<I, S>(lines: I) -> Result<Vec<Record>, ParseError>
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    LogParser::new().parse_optional(lines)
}

/// Parse a single line with the default [`LogParser`].
pub fn parse_line(line: &str) -> Result<Option<Record>, ParseError> {
    LogParser::new().parse_line(line)
}
