//! Stock table client.
//!
//! Periodically fetches the quote list from an HTTP endpoint, sorts it by percent
//! change and rewrites a table body with one row per quote. The pieces are wired
//! together explicitly instead of relying on a global document or timer:
//!
//! - `source` — where quotes come from (`QuoteSource`, `HttpQuoteSource`).
//! - `alerts` — once-a-day de-duplication of parabolic alerts (`DailyAlerts`).
//! - `table` — where rows go (`TableBody`, `HtmlTable`, `ConsoleTable`).
//! - `renderer` — one fetch-sort-rebuild pass (`StockTableRenderer`).
//! - `scheduler` — drives the renderer on a fixed period (`RefreshScheduler`).
#![warn(missing_docs)]
pub mod alerts;
pub mod renderer;
pub mod scheduler;
pub mod source;
pub mod table;

pub use alerts::DailyAlerts;
pub use renderer::{FailurePolicy, StockTableRenderer};
pub use scheduler::{OverlapPolicy, RefreshScheduler, SchedulerStats};
pub use source::{HttpQuoteSource, QuoteSource};
pub use table::{ConsoleTable, HtmlTable, TableBody};
