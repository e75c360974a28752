//!
//! Common types and utilities shared by the stock table client and its tests.
//!
//! This crate aggregates:
//! - `error` — unified error type `BoardError` used across the workspace.
//! - `result` — handy `Result<T, BoardError>` alias.
//! - `quote` — the `StockQuote` record, payload decoding and the change sort.
//! - `format` — turning quotes into display-ready table rows.
//! - `net` — endpoint, refresh period and table identifier constants.
#![warn(missing_docs)]
pub mod error;
pub mod format;
pub mod net;
pub mod quote;
pub mod result;

pub use error::BoardError;
pub use format::{ChangeClass, QuoteFormatter, TableRow};
pub use quote::{QuoteFeed, StockQuote};
pub use result::Result;
