//! Stock Table — fetches a JSON list of stock quotes from an HTTP endpoint every
//! minute and renders it as a table sorted by percent change, largest gain first.
//!
//! Usage example (CLI):
//! ```bash
//! stock_table --endpoint http://127.0.0.1:5000/stocks --html ./public/index.html
//! ```
//!
//! Without `--html` the table is printed to the terminal after every refresh.
//! Ctrl+C stops the refresh loop.
#![warn(missing_docs)]
mod args;

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use crossbeam_channel::bounded;
use log::{error, info};
use stock_common::{BoardError, QuoteFormatter, Result};
use stock_table::{
    ConsoleTable, HtmlTable, HttpQuoteSource, RefreshScheduler, StockTableRenderer,
    TableBody,
};

use crate::args::Args;

fn main() -> Result<()> {
    init_logger();
    let args = Args::parse();

    let formatter = QuoteFormatter::from_locale_name(&args.locale)?;
    let source = HttpQuoteSource::new(
        args.endpoint.trim(),
        args.timeout_secs.map(Duration::from_secs),
    )?;
    info!("Quote endpoint: {}", source.url());

    match &args.html {
        Some(path) => {
            let table = HtmlTable::open(path, args.interval_secs)?;
            info!("Writing table to {}", table.path().display());
            run(&args, source, table, formatter)
        }
        None => run(&args, source, ConsoleTable::stdout(), formatter),
    }
}

fn run<T: TableBody + 'static>(
    args: &Args,
    source: HttpQuoteSource,
    table: T,
    formatter: QuoteFormatter,
) -> Result<()> {
    let renderer = StockTableRenderer::new(source, table)
        .with_formatter(formatter)
        .with_failure_policy(args.on_failure);

    if args.once {
        return match renderer.render_stocks() {
            Ok(rows) => {
                info!("Rendered {} rows", rows);
                Ok(())
            }
            Err(e) => {
                error!("Refresh failed: {}", e);
                Err(e)
            }
        };
    }

    let (shutdown_tx, shutdown_rx) = bounded::<()>(1);
    ctrlc::set_handler(move || {
        info!("Ctrl+C received. Shutting down...");
        let _ = shutdown_tx.try_send(());
    })
    .map_err(|e| BoardError::Signal(e.to_string()))?;

    RefreshScheduler::new(Duration::from_secs(args.interval_secs))
        .with_overlap_policy(args.overlap)
        .run(Arc::new(renderer), shutdown_rx);
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
