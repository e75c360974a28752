//! Display formatting for quote cells.
//!
//! Turns a `StockQuote` into a `TableRow` of four ready-to-print cells:
//! ticker (verbatim), price (two decimals), volume (locale digit grouping) and
//! change (two decimals with a `%` suffix) plus a `ChangeClass` used for styling.

use num_format::{Locale, ToFormattedString};
use strum_macros::{AsRefStr, Display};

use crate::error::BoardError;
use crate::quote::StockQuote;
use crate::result::Result;

/// Visual classification of a change cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum ChangeClass {
    /// Change is zero or above.
    Positive,
    /// Change is below zero.
    Negative,
}

impl ChangeClass {
    /// Classify a percent change by its sign.
    pub fn of(change: f64) -> Self {
        if change >= 0.0 {
            ChangeClass::Positive
        } else {
            ChangeClass::Negative
        }
    }
}

/// One rendered row of the quote table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// Ticker cell.
    pub ticker: String,
    /// Price cell.
    pub price: String,
    /// Volume cell.
    pub volume: String,
    /// Change cell, with `%` suffix.
    pub change: String,
    /// Styling of the change cell.
    pub class: ChangeClass,
}

/// Formats quotes into table cells.
#[derive(Debug, Clone, Copy)]
pub struct QuoteFormatter {
    locale: Locale,
}

impl Default for QuoteFormatter {
    fn default() -> Self {
        Self { locale: Locale::en }
    }
}

impl QuoteFormatter {
    /// Create a formatter grouping volume digits the way `locale` does.
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Create a formatter from a locale name such as `en` or `de`.
    pub fn from_locale_name(name: &str) -> Result<Self> {
        let locale = Locale::from_name(name.trim())
            .map_err(|_| BoardError::Locale(name.to_string()))?;
        Ok(Self::new(locale))
    }

    /// Price with exactly two decimal digits.
    pub fn price(&self, price: f64) -> String {
        fixed2(price)
    }

    /// Volume with thousands grouping.
    pub fn volume(&self, volume: u64) -> String {
        volume.to_formatted_string(&self.locale)
    }

    /// Change with exactly two decimal digits and a `%` suffix.
    pub fn change(&self, change: f64) -> String {
        // -0.0 would otherwise print as "-0.00"
        let change = if change == 0.0 { 0.0 } else { change };
        format!("{}%", fixed2(change))
    }

    /// Build the full row for a quote.
    pub fn row(&self, quote: &StockQuote) -> TableRow {
        TableRow {
            ticker: quote.ticker.clone(),
            price: self.price(quote.price),
            volume: self.volume(quote.volume),
            change: self.change(quote.change),
            class: ChangeClass::of(quote.change),
        }
    }
}

/// Largest magnitude whose cent count is still exact in an `f64`.
const MAX_EXACT_CENTS: f64 = 1e13;

/// Two-decimal text where exact halves round away from zero.
///
/// `{:.2}` rounds a value sitting exactly between two cents to the even digit
/// (`0.125` -> `0.12`); table cells round it up in magnitude instead (`0.13`).
/// A value of `f64` lies exactly on a half cent only when eight times its
/// magnitude is an odd integer, so only those values take the slow path.
fn fixed2(value: f64) -> String {
    let magnitude = value.abs();
    let eighths = magnitude * 8.0;
    let on_half_cent = eighths.fract() == 0.0 && eighths % 2.0 == 1.0;
    if !on_half_cent || magnitude >= MAX_EXACT_CENTS {
        return format!("{:.2}", value);
    }

    let cents = (magnitude * 100.0).ceil() as u64;
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{}.{:02}", sign, cents / 100, cents % 100)
}
