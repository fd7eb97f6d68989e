//! Command handlers for the logstat CLI.
//!
//! The binary has a single command; argument parsing lives in `logstat::cli`.

pub mod report;
