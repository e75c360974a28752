//! Quote data model and payload decoding.
//!
//! A `StockQuote` is one row of data as served by the quote endpoint: ticker symbol,
//! last price, traded volume and percent change. Quotes are transient; every fetch
//! produces a fresh list that is sorted, rendered and dropped.
//!
//! The endpoint may answer either with a bare JSON array of quotes or with an
//! envelope object `{"stocks": [...], "parabolic_alerts": [...]}`. Both decode into
//! a `QuoteFeed`.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::BoardError;
use crate::result::Result;

/// Market quote for a single ticker symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockQuote {
    /// Symbol identifier, displayed verbatim.
    pub ticker: String,
    /// Last traded price.
    pub price: f64,
    /// Traded volume.
    pub volume: u64,
    /// Percent change; the sign decides the row styling.
    pub change: f64,
}

impl StockQuote {
    /// Create a new quote.
    pub fn new(ticker: &str, price: f64, volume: u64, change: f64) -> Self {
        StockQuote {
            ticker: String::from(ticker),
            price,
            volume,
            change,
        }
    }
}

/// Decoded response of the quote endpoint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuoteFeed {
    /// Quotes to render, in the order the source sent them.
    pub stocks: Vec<StockQuote>,
    /// Quotes the source flagged as parabolic movers. Empty for bare-array payloads.
    pub alerts: Vec<StockQuote>,
}

#[derive(Deserialize)]
struct Envelope {
    stocks: Vec<StockQuote>,
    #[serde(default)]
    parabolic_alerts: Vec<StockQuote>,
}

/// Decode a response body into a `QuoteFeed`.
///
/// Any record with a missing or mistyped field fails the whole payload; a partial
/// list is never returned.
pub fn decode_quotes(body: &[u8]) -> Result<QuoteFeed> {
    let value: Value = serde_json::from_slice(body)?;
    if value.is_array() {
        return Ok(QuoteFeed {
            stocks: serde_json::from_value(value)?,
            alerts: Vec::new(),
        });
    }
    if value.get("stocks").is_none() {
        return Err(BoardError::Format(format!(
            "expected a list of quotes, got {}",
            kind_of(&value)
        )));
    }
    let envelope: Envelope = serde_json::from_value(value)?;
    Ok(QuoteFeed {
        stocks: envelope.stocks,
        alerts: envelope.parabolic_alerts,
    })
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object without `stocks`",
    }
}

/// Sort quotes by `change`, largest first.
///
/// The sort is stable: quotes with equal change keep the order the source sent them.
pub fn sort_by_change_desc(quotes: &mut [StockQuote]) {
    quotes.sort_by(|a, b| b.change.partial_cmp(&a.change).unwrap_or(Ordering::Equal));
}
