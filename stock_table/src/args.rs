//! Command-line arguments for the stock table client.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use std::path::PathBuf;

use clap::Parser;
use stock_common::net::{DEFAULT_ENDPOINT, REFRESH_PERIOD_SECS};
use stock_table::{FailurePolicy, OverlapPolicy};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// URL answering with the JSON list of quotes.
    #[clap(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Seconds between two refreshes.
    #[clap(long, default_value_t = REFRESH_PERIOD_SECS, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval_secs: u64,

    /// Write the table to this HTML file instead of the terminal.
    /// The directory must already exist.
    #[clap(long)]
    pub html: Option<PathBuf>,

    /// Locale used to group volume digits (e.g. `en`, `de`, `fr`).
    #[clap(long, default_value = "en")]
    pub locale: String,

    /// What the table shows after a failed refresh.
    #[clap(long, value_enum, default_value_t = FailurePolicy::Clear)]
    pub on_failure: FailurePolicy,

    /// What to do when a refresh is due while the previous one is still running.
    #[clap(long, value_enum, default_value_t = OverlapPolicy::Skip)]
    pub overlap: OverlapPolicy,

    /// Abort requests that take longer than this many seconds. No limit by default.
    #[clap(long)]
    pub timeout_secs: Option<u64>,

    /// Render once and exit; the exit status reflects the outcome.
    #[clap(long)]
    pub once: bool,
}
