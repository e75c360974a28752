//! Shared networking and presentation constants.

/// Endpoint serving the JSON quote list.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/stocks";
/// Seconds between two render cycles.
pub const REFRESH_PERIOD_SECS: u64 = 60;
/// Identifier of the table element whose body is rewritten every cycle.
pub const TABLE_ID: &str = "stockTable";
