//! Centralized constants for default endpoints and UA.

/// Identifies this crate to the providers.
pub(crate) const USER_AGENT: &str = concat!("stockfeed-rs/", env!("CARGO_PKG_VERSION"));

/// Daily time-series endpoint (query parameters are appended).
pub(crate) const DEFAULT_BASE_DAILY_SERIES: &str = "https://alpha-vantage.p.rapidapi.com/query";

/// Per-symbol news endpoint (query parameters are appended).
pub(crate) const DEFAULT_BASE_STOCK_NEWS: &str =
    "https://real-time-finance-data.p.rapidapi.com/stock-news";

/// Topic news feed endpoint (query parameters are appended).
pub(crate) const DEFAULT_BASE_TOPIC_FEED: &str = "https://www.alphavantage.co/query";
