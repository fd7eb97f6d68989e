//! logstat - CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;
use std::time::Instant;

use logstat::cli::Cli;

fn main() -> Result<()> {
    let started = Instant::now();
    let cli = Cli::parse();
    commands::report::handle(&cli, started)
}
