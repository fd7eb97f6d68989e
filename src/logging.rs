//! Diagnostic logging setup.
//!
//! Reports go to stdout; diagnostics go to stderr through `tracing`, so the
//! two never interleave in redirected output.

use std::io::IsTerminal;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding a `tracing` filter directive
pub const LOG_ENV: &str = "LOGSTAT_LOG";

/// Build the level filter.
///
/// `LOGSTAT_LOG` wins when set and valid, otherwise `default_level` applies.
pub fn build_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Install the global stderr subscriber.
pub fn init_logging(default_level: &str) {
    fmt()
        .with_env_filter(build_filter(default_level))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}
