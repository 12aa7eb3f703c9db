//! Fetch-filter-write ingestion over the repository seam.

mod dedup;
mod symbol;
mod topic;

use std::sync::Arc;

use chrono::Duration;

use crate::core::{FeedClient, FeedError, IngestReport, StockQuote};
use crate::quote::QuoteBuilder;
use crate::repo::{NewsRepository, StoredStock};
use crate::topics::Topic;

/// Default trailing window consulted when computing duplicates.
const DEFAULT_DEDUP_WINDOW_DAYS: i64 = 7;

/// High-level entry point for resolving stocks and ingesting news.
///
/// An `Ingestor` pairs a [`FeedClient`] with a [`NewsRepository`]. Each
/// ingestion call is a single fetch-filter-write pass: read the recently
/// stored articles, drop the provider candidates that match any of them,
/// persist the rest. There is no retry loop and no cursor; a provider
/// failure propagates immediately.
///
/// Articles older than the de-duplication window are not consulted, so a
/// story can re-enter once it ages out. That trailing window is policy, not
/// an accident, and it is tunable via [`Ingestor::dedup_window`].
pub struct Ingestor {
    client: FeedClient,
    repo: Arc<dyn NewsRepository>,
    window: Duration,
    max_candidates: u32,
}

impl Ingestor {
    /// Creates a new `Ingestor` over a client and a repository.
    pub fn new(client: &FeedClient, repo: Arc<dyn NewsRepository>) -> Self {
        Self {
            client: client.clone(),
            repo,
            window: Duration::days(DEFAULT_DEDUP_WINDOW_DAYS),
            max_candidates: 20,
        }
    }

    /// Overrides the trailing de-duplication window (default 7 days).
    #[must_use]
    pub fn dedup_window(mut self, window: Duration) -> Self {
        self.window = window;
        self
    }

    /// Overrides how many provider candidates one per-symbol pass considers
    /// (default 20).
    #[must_use]
    pub const fn max_candidates(mut self, count: u32) -> Self {
        self.max_candidates = count;
        self
    }

    /// The repository this ingestor writes to, for callers that also read
    /// from it.
    pub fn repository(&self) -> &Arc<dyn NewsRepository> {
        &self.repo
    }

    /// Fetches the latest daily quote for a symbol without touching the
    /// repository.
    ///
    /// # Errors
    ///
    /// See [`QuoteBuilder::fetch`].
    pub async fn lookup_quote(&self, symbol: &str) -> Result<StockQuote, FeedError> {
        QuoteBuilder::new(&self.client, symbol).fetch().await
    }

    /// Returns the stored stock for `symbol`, creating it from a fresh quote
    /// lookup when it is not tracked yet.
    ///
    /// # Errors
    ///
    /// Propagates quote-lookup failures (`NotFound` for unknown symbols) and
    /// repository errors.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %symbol)))]
    pub async fn ensure_stock(&self, symbol: &str) -> Result<StoredStock, FeedError> {
        let normalized = symbol.trim().to_uppercase();
        if let Some(stock) = self.repo.find_stock(&normalized).await? {
            return Ok(stock);
        }
        let quote = self.lookup_quote(&normalized).await?;
        // the quote carries the provider's canonical symbol, which may
        // differ from the input
        if let Some(stock) = self.repo.find_stock(&quote.symbol).await? {
            return Ok(stock);
        }
        self.repo.create_stock(&quote).await
    }

    /// Ingests fresh news for a tracked stock and returns how many articles
    /// were stored.
    ///
    /// # Errors
    ///
    /// Returns `FeedError::NotFound` when the stock is not in the
    /// repository, `FeedError::Upstream` when the provider fails, and
    /// repository errors as-is.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %symbol)))]
    pub async fn ingest_symbol_news(&self, symbol: &str) -> Result<IngestReport, FeedError> {
        symbol::ingest_symbol_news(
            &self.client,
            self.repo.as_ref(),
            symbol,
            self.window,
            self.max_candidates,
        )
        .await
    }

    /// Ingests fresh news for a set of topic tags and returns how many
    /// articles were stored.
    ///
    /// Tag validation happens when parsing [`Topic`], so only known tags can
    /// reach this call.
    ///
    /// # Errors
    ///
    /// Returns `FeedError::Validation` for an empty tag set,
    /// `FeedError::Upstream` when the provider fails, and repository errors
    /// as-is.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(topics = topics.len())))]
    pub async fn ingest_topic_news(&self, topics: &[Topic]) -> Result<IngestReport, FeedError> {
        topic::ingest_topic_news(&self.client, self.repo.as_ref(), topics, self.window).await
    }

    /// Runs [`Ingestor::ingest_symbol_news`] only when the stock has no
    /// stored articles yet; otherwise reports zero without calling the
    /// provider.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Ingestor::ingest_symbol_news`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %symbol)))]
    pub async fn backfill_symbol_news(&self, symbol: &str) -> Result<IngestReport, FeedError> {
        let normalized = symbol.trim().to_uppercase();
        let stock = self
            .repo
            .find_stock(&normalized)
            .await?
            .ok_or_else(|| FeedError::NotFound(format!("stock `{normalized}` is not tracked")))?;

        if self.repo.has_articles_for(stock.id).await? {
            return Ok(IngestReport { count: 0 });
        }
        self.ingest_symbol_news(&normalized).await
    }
}
