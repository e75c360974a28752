//! Once-a-day bookkeeping for parabolic alerts.
//!
//! The quote endpoint keeps listing a ticker under `parabolic_alerts` for as long as
//! the move lasts. `DailyAlerts` remembers which tickers were already reported on a
//! given day so each one is announced at most once per day; the first sighting on a
//! new day starts from an empty set.
use std::collections::HashSet;
use std::sync::Mutex;

use chrono::NaiveDate;
use stock_common::Result;

#[derive(Default)]
struct Flagged {
    day: Option<NaiveDate>,
    tickers: HashSet<String>,
}

/// Tickers already alerted on the current day.
#[derive(Default)]
pub struct DailyAlerts {
    state: Mutex<Flagged>,
}

impl DailyAlerts {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `ticker` as alerted on `day`.
    ///
    /// Returns `true` for the first sighting of the ticker that day, `false` when it
    /// was already flagged.
    pub fn flag(&self, ticker: &str, day: NaiveDate) -> Result<bool> {
        let mut state = self.state.lock()?;
        if state.day != Some(day) {
            state.day = Some(day);
            state.tickers.clear();
        }
        Ok(state.tickers.insert(ticker.to_string()))
    }

    /// Whether `ticker` was already alerted on `day`.
    pub fn is_flagged(&self, ticker: &str, day: NaiveDate) -> Result<bool> {
        let state = self.state.lock()?;
        Ok(state.day == Some(day) && state.tickers.contains(ticker))
    }

    /// Forget every flagged ticker so the next sighting alerts again.
    pub fn clear(&self) -> Result<()> {
        self.state.lock()?.tickers.clear();
        Ok(())
    }
}
