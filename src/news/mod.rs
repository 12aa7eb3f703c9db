mod api;
mod wire;

use crate::core::{FeedClient, FeedError, FetchedArticle};

/// A builder for fetching candidate news articles for a specific symbol.
pub struct SymbolNewsBuilder {
    client: FeedClient,
    symbol: String,
    count: u32,
    language: String,
}

impl SymbolNewsBuilder {
    /// Creates a new `SymbolNewsBuilder` for a given symbol.
    pub fn new(client: &FeedClient, symbol: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            symbol: symbol.into(),
            count: 20,
            language: "en".to_string(),
        }
    }

    /// Sets the maximum number of candidates to return.
    #[must_use]
    pub const fn count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    /// Sets the article language requested from the provider.
    #[must_use]
    pub fn language(mut self, lang: impl Into<String>) -> Self {
        self.language = lang.into();
        self
    }

    /// Executes the request and fetches the candidate articles.
    ///
    /// Items whose publish timestamp cannot be parsed are dropped.
    ///
    /// # Errors
    ///
    /// Returns `FeedError::Upstream` when the provider's status is not
    /// `"OK"` or the news list is absent, and a transport variant when the
    /// request itself fails.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol)))]
    pub async fn fetch(self) -> Result<Vec<FetchedArticle>, FeedError> {
        api::fetch_symbol_news(&self.client, &self.symbol, self.count, &self.language).await
    }
}
