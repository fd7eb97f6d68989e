//! CLI definitions for logstat
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be accessed by xtask for documentation generation (man pages, markdown).

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::Parser;
use std::path::PathBuf;

/// Build clap styles using our theme colors.
///
/// - Green: headers, usage, literals (accent color)
/// - White: placeholders and valid values
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser, Debug)]
#[command(name = "logstat")]
#[command(about = "Request log statistics - slowest resources and hourly load histogram")]
#[command(
    long_about = "logstat reads an application log, picks out request timing lines and prints
two reports:

  1. Resources with the highest average request duration
  2. A histogram of summed request duration per hour

Two line layouts are recognized:

  <timestamp> (<thread>) [<context>] <resource> ... in <millis>
  <timestamp> (<thread>) [<context>] /<path>?action=<resource>... in <millis>

where <timestamp> is 'yyyy-MM-dd HH:mm:ss,SSS'. All other lines are ignored.

Settings are read from ~/.config/logstat/config.toml when present."
)]
#[command(after_help = "EXAMPLES:
    logstat timing.log 10       Top 10 slowest resources and the hourly histogram
    logstat timing.log          All resources, slowest first")]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Log file to analyze
    #[arg(value_name = "FILE", help = "Log file name or path")]
    pub file: PathBuf,

    /// Number of resources to show in the average duration report
    #[arg(
        value_name = "TOP",
        help = "Show only the N resources with the highest average request duration"
    )]
    pub top: Option<usize>,

    /// Disable colored output
    #[arg(long, help = "Disable colored output")]
    pub no_color: bool,
}
