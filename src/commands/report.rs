//! Report command handler

use anyhow::{Context, Result};
use humansize::{format_size, BINARY};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

use logstat::cli::Cli;
use logstat::{aggregate, logging, parser, Config, Record, ReportWriter, Theme};

/// Analyze the log file named on the command line and print both reports.
#[cfg(not(tarpaulin_include))]
pub fn handle(cli: &Cli, started: Instant) -> Result<()> {
    let config = Config::load()?;
    logging::init_logging(&config.logging.level);

    let contents = read_log(&cli.file)?;
    let records = parser::parse(contents.lines())
        .with_context(|| format!("Failed to parse log file: {:?}", cli.file))?;
    info!(
        lines = contents.lines().count(),
        records = records.len(),
        "parsed log file"
    );

    if records.is_empty() {
        warn!("no request records found in {}", cli.file.display());
    }

    let theme = Theme::detect(config.output.color, cli.no_color);
    let writer = ReportWriter::new(&config.report, theme);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    write_reports(&mut out, &writer, &records, config.resolve_top(cli.top))?;
    writer.write_elapsed(&mut out, started.elapsed())?;
    out.flush()?;
    Ok(())
}

/// Read the whole log file, replacing invalid UTF-8 sequences.
pub fn read_log(path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| {
        format!(
            "Failed to read log file {:?}. Pass a readable log file path (see --help)",
            path
        )
    })?;
    info!(
        path = %path.display(),
        size = %format_size(bytes.len() as u64, BINARY),
        "read log file"
    );
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Write the average and histogram sections.
///
/// Each section is attempted on its own; an empty one is reported as a
/// warning and does not stop the other.
pub fn write_reports<W: Write>(
    out: &mut W,
    writer: &ReportWriter,
    records: &[Record],
    top: Option<usize>,
) -> Result<()> {
    let averages = aggregate::average_duration_by_resource(records, top);
    debug!(resources = averages.len(), "built average duration report");
    if averages.is_empty() {
        warn!("no data to print resources with highest average request duration");
    } else {
        writer.write_averages(out, &averages)?;
    }

    let hourly = aggregate::duration_sum_by_hour(records);
    debug!(buckets = hourly.len(), "built hourly duration report");
    if hourly.is_empty() {
        warn!("no data to draw histogram of hourly number of requests");
    } else {
        writer.write_histogram(out, &hourly)?;
    }

    Ok(())
}
