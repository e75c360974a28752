//! Quote sources.
//!
//! A `QuoteSource` hands the renderer a fresh list of quotes per call. The production
//! implementation is `HttpQuoteSource`, which issues one `GET` against the quote
//! endpoint: no extra headers, no query parameters, no retry.
use std::time::Duration;

use chrono::{Local, NaiveDate};
use log::{debug, info};
use stock_common::quote::decode_quotes;
use stock_common::{BoardError, Result, StockQuote};

use crate::alerts::DailyAlerts;

/// Anything able to produce the current list of quotes.
pub trait QuoteSource: Send + Sync {
    /// Fetch the latest quotes in the order the source returns them.
    fn fetch(&self) -> Result<Vec<StockQuote>>;
}

/// Blocking HTTP client for the quote endpoint.
pub struct HttpQuoteSource {
    client: reqwest::blocking::Client,
    url: String,
    alerts: DailyAlerts,
}

impl HttpQuoteSource {
    /// Create a source for `url`. With `timeout` set to `None` a hung request waits
    /// indefinitely.
    pub fn new(url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::blocking::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| BoardError::Http(e.to_string()))?;

        Ok(Self {
            client,
            url: url.to_string(),
            alerts: DailyAlerts::new(),
        })
    }

    /// Endpoint this source queries.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Tickers already alerted today.
    pub fn alerts(&self) -> &DailyAlerts {
        &self.alerts
    }

    /// Log alerts not yet reported on `day` and return their tickers.
    fn report_alerts(&self, alerts: &[StockQuote], day: NaiveDate) -> Result<Vec<String>> {
        let mut reported = Vec::new();
        for alert in alerts {
            if !self.alerts.flag(&alert.ticker, day)? {
                debug!("{} already flagged today", alert.ticker);
                continue;
            }
            info!(
                "Parabolic alert: {} price={:.2} volume={} change={:.2}%",
                alert.ticker, alert.price, alert.volume, alert.change
            );
            reported.push(alert.ticker.clone());
        }
        Ok(reported)
    }
}

impl QuoteSource for HttpQuoteSource {
    fn fetch(&self) -> Result<Vec<StockQuote>> {
        debug!("GET {}", self.url);
        let response = self
            .client
            .get(&self.url)
            .send()
            .map_err(|e| BoardError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BoardError::Status {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let body = response
            .bytes()
            .map_err(|e| BoardError::Http(e.to_string()))?;
        let feed = decode_quotes(&body)?;

        self.report_alerts(&feed.alerts, Local::now().date_naive())?;
        debug!("Received {} quotes from {}", feed.stocks.len(), self.url);
        Ok(feed.stocks)
    }
}
