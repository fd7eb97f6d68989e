//! Console rendering of the aggregate reports
//!
//! ```text
//! Resources with highest average request duration:
//!     1) updateSubscriptionFromBackend = 243.0
//!     2) SERVICES = 46.0
//!
//! Draw histogram of hourly number of requests:
//!     0-100(step 1%) => ****************************************************************************************************
//!     2015-08-19: 01 => ****************************************************************************************************
//!     2015-08-19: 06 => ******************
//!
//! Program work time = 12 millis
//! ```

use std::fmt::Write as _;
use std::io::{self, Write};
use std::time::Duration;

use crate::aggregate::{HourlyTotals, ResourceAverages};
use crate::config::ReportConfig;
use crate::theme::Theme;

/// Character used for histogram bars
pub const BAR_CHAR: char = '*';

/// Writes reports using the configured layout and theme.
pub struct ReportWriter<'a> {
    settings: &'a ReportConfig,
    theme: Theme,
}

impl<'a> ReportWriter<'a> {
    pub fn new(settings: &'a ReportConfig, theme: Theme) -> Self {
        Self { settings, theme }
    }

    /// Write the numbered list of resources with the highest average duration.
    pub fn write_averages<W: Write>(&self, out: &mut W, averages: &ResourceAverages) -> io::Result<()> {
        writeln!(
            out,
            "{}",
            self.theme
                .accent_text("Resources with highest average request duration:")
        )?;
        for (position, (name, mean)) in averages.iter().enumerate() {
            writeln!(
                out,
                "    {}) {} = {:?}",
                position + 1,
                self.theme.primary_text(name),
                mean
            )?;
        }
        Ok(())
    }

    /// Write the hourly histogram, scaled so the busiest hour fills the width.
    pub fn write_histogram<W: Write>(&self, out: &mut W, totals: &HourlyTotals) -> io::Result<()> {
        let width = self.settings.histogram_width;
        let max = totals.values().copied().max().unwrap_or(0);

        writeln!(out)?;
        writeln!(
            out,
            "{}",
            self.theme
                .accent_text("Draw histogram of hourly number of requests:")
        )?;
        writeln!(
            out,
            "    {} => {}",
            self.theme
                .secondary_text(&format!("0-100(step {}%)", format_step(width))),
            self.theme.secondary_text(&bar(width))
        )?;

        for (hour, total) in totals {
            let mut label = String::new();
            write!(label, "{}", hour.format(&self.settings.hour_format)).map_err(|_| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!(
                        "hour format '{}' cannot render {}",
                        self.settings.hour_format, hour
                    ),
                )
            })?;
            writeln!(
                out,
                "    {} => {}",
                self.theme.primary_text(&label),
                self.theme.accent_text(&bar(bar_length(*total, max, width)))
            )?;
        }
        Ok(())
    }

    /// Write the total run time.
    pub fn write_elapsed<W: Write>(&self, out: &mut W, elapsed: Duration) -> io::Result<()> {
        writeln!(out)?;
        writeln!(
            out,
            "{}",
            self.theme
                .secondary_text(&format!("Program work time = {} millis", elapsed.as_millis()))
        )
    }
}

/// Number of bar characters for `value` relative to `max`.
///
/// Uses integer division, so anything below one step rounds down to an
/// empty bar. A zero `max` gives empty bars.
pub fn bar_length(value: u128, max: u128, width: usize) -> usize {
    if max == 0 {
        return 0;
    }
    let width = width as u128;
    let scaled = match value.checked_mul(width) {
        Some(product) => product / max,
        None => value / (max / width).max(1),
    };
    scaled.min(width) as usize
}

fn bar(length: usize) -> String {
    BAR_CHAR.to_string().repeat(length)
}

/// Percentage represented by one bar character, without trailing zeros.
fn format_step(width: usize) -> String {
    let step = format!("{:.2}", 100.0 / width as f64);
    step.trim_end_matches('0').trim_end_matches('.').to_string()
}
