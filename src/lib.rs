//! logstat library
//!
//! Parses request timing lines out of application logs and aggregates them
//! into per-resource averages and hourly duration totals.
//!
//! ```
//! use logstat::{aggregate, parser};
//!
//! let lines = [
//!     "2015-08-19 00:06:42,375 (http-1) [] updateSubscriptionFromBackend 300109921258 in 243",
//!     "2015-08-19 00:50:00,000 (http-2) [USER:1] /mobilityServices.do?action=SERVICES in 46",
//! ];
//! let records = parser::parse(lines)?;
//!
//! let averages = aggregate::average_duration_by_resource(&records, Some(1));
//! assert_eq!(averages.names().collect::<Vec<_>>(), vec!["updateSubscriptionFromBackend"]);
//!
//! let hourly = aggregate::duration_sum_by_hour(&records);
//! assert_eq!(hourly.values().sum::<u128>(), 289);
//! # Ok::<(), logstat::parser::ParseError>(())
//! ```

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod logging;
pub mod parser;
pub mod record;
pub mod report;
pub mod theme;

pub use aggregate::{HourlyTotals, ResourceAverages};
pub use config::Config;
pub use parser::{LineShape, LogParser, ParseError};
pub use record::Record;
pub use report::ReportWriter;
pub use theme::Theme;
