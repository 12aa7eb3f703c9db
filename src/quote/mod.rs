mod api;
mod wire;

use crate::core::{FeedClient, FeedError, StockQuote};

/// Fetches the latest daily open/close for a symbol.
///
/// Convenience wrapper over [`QuoteBuilder`] with default settings.
///
/// # Errors
///
/// Returns `FeedError::NotFound` when the provider has no data for the
/// symbol, and `FeedError::Upstream` (or a transport variant) when the
/// response is malformed or the request fails.
pub async fn lookup_quote(client: &FeedClient, symbol: &str) -> Result<StockQuote, FeedError> {
    QuoteBuilder::new(client, symbol).fetch().await
}

/// A builder for looking up the most recent daily quote of a symbol.
///
/// The lookup is a pure fetch-and-normalize: it never touches the
/// repository. Persisting the result is the caller's business (see
/// [`crate::ingest::Ingestor::ensure_stock`]).
#[derive(Debug)]
pub struct QuoteBuilder {
    client: FeedClient,
    symbol: String,
}

impl QuoteBuilder {
    /// Creates a new `QuoteBuilder` for a given symbol (case-insensitive).
    pub fn new(client: &FeedClient, symbol: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            symbol: symbol.into(),
        }
    }

    /// Executes the request and normalizes the latest daily bar.
    ///
    /// # Errors
    ///
    /// Returns a `FeedError` if the request fails, the provider reports an
    /// unknown symbol, or the payload is missing the metadata block or the
    /// time series.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol)))]
    pub async fn fetch(self) -> Result<StockQuote, FeedError> {
        api::fetch_daily_quote(&self.client, &self.symbol).await
    }
}
