//! The fetch-sort-rebuild pass.
//!
//! `StockTableRenderer` owns its quote source and its table body; nothing about the
//! output target is global. One call to [`StockTableRenderer::render_stocks`] is one
//! render cycle:
//!
//! 1. with `FailurePolicy::Clear`, the body is emptied up front;
//! 2. the source is asked for the current quotes;
//! 3. on failure the error is returned and the body is left as step 1 left it;
//! 4. otherwise quotes are sorted by change (descending, stable), formatted, and the
//!    body is replaced with exactly those rows.
//!
//! The body sits behind a mutex so cycles running on different threads can share
//! one renderer; every successful cycle rewrites the body in full under the lock,
//! so the last cycle to finish is the one on screen.
use std::sync::Mutex;

use clap::ValueEnum;
use log::debug;
use stock_common::quote::sort_by_change_desc;
use stock_common::{QuoteFormatter, Result, TableRow};
use strum_macros::Display;

use crate::source::QuoteSource;
use crate::table::TableBody;

/// What the table shows after a failed cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum FailurePolicy {
    /// Empty the table at the start of every cycle; a failed cycle leaves it empty.
    #[default]
    Clear,
    /// Only touch the table once new quotes arrived; a failed cycle keeps the last rows.
    KeepLast,
}

/// Renders quotes from a source into a table body.
pub struct StockTableRenderer<S, T> {
    source: S,
    table: Mutex<T>,
    formatter: QuoteFormatter,
    on_failure: FailurePolicy,
}

impl<S: QuoteSource, T: TableBody> StockTableRenderer<S, T> {
    /// Renderer with the default formatter and `FailurePolicy::Clear`.
    pub fn new(source: S, table: T) -> Self {
        Self {
            source,
            table: Mutex::new(table),
            formatter: QuoteFormatter::default(),
            on_failure: FailurePolicy::default(),
        }
    }

    /// Use `formatter` for the table cells.
    pub fn with_formatter(mut self, formatter: QuoteFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Use `policy` when a cycle fails.
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.on_failure = policy;
        self
    }

    /// Run one render cycle and return the number of rows written.
    pub fn render_stocks(&self) -> Result<usize> {
        if self.on_failure == FailurePolicy::Clear {
            self.table.lock()?.clear()?;
        }

        let mut quotes = self.source.fetch()?;
        sort_by_change_desc(&mut quotes);
        let rows: Vec<TableRow> = quotes.iter().map(|q| self.formatter.row(q)).collect();
        let count = rows.len();

        self.table.lock()?.replace(rows)?;
        debug!("Rendered {} rows", count);
        Ok(count)
    }

    /// Copy of the rows currently in the table.
    pub fn rows(&self) -> Result<Vec<TableRow>> {
        Ok(self.table.lock()?.rows().to_vec())
    }

    /// The quote source this renderer reads from.
    pub fn source(&self) -> &S {
        &self.source
    }
}
