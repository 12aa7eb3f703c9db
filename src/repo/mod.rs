//! The persistence seam.
//!
//! Ingestion talks to storage exclusively through [`NewsRepository`], so the
//! fetch-filter-write logic is testable against [`MemoryRepository`] without
//! a real store behind it.

mod memory;

pub use memory::MemoryRepository;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::core::{FeedError, NewsArticle, StockQuote};

/// A stock row as persisted by the backing store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredStock {
    pub id: i64,
    /// Canonical ticker symbol, uppercased.
    pub symbol: String,
    pub open_price: String,
    pub close_price: String,
}

/// The projection of an article that de-duplication compares against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredArticle {
    pub title: String,
    pub url: String,
    pub date: DateTime<Utc>,
}

/// Which articles a [`NewsRepository::recent_articles`] read covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleScope {
    /// Articles associated with this stock, plus unassociated (topic-only)
    /// ones.
    ForStockOrGlobal(i64),
    /// Every article regardless of stock association.
    All,
}

/// Narrow find/create/bulk-insert surface over stocks and news articles.
///
/// Concurrency contract: two concurrent ingestion calls for the same symbol
/// may both pass the in-memory de-duplication check and submit overlapping
/// batches. Whatever uniqueness rules the backing store enforces are the
/// sole race-breaker; implementations must skip (not fail) rows that
/// violate them.
#[async_trait]
pub trait NewsRepository: Send + Sync {
    /// Looks up a stock by its exact (uppercased) symbol.
    async fn find_stock(&self, symbol: &str) -> Result<Option<StoredStock>, FeedError>;

    /// Creates a stock row from a fetched quote and returns it.
    async fn create_stock(&self, quote: &StockQuote) -> Result<StoredStock, FeedError>;

    /// Whether any article is already associated with this stock.
    async fn has_articles_for(&self, stock_id: i64) -> Result<bool, FeedError>;

    /// Reads the articles de-duplication compares against: those in `scope`
    /// dated at or after `since`.
    async fn recent_articles(
        &self,
        scope: ArticleScope,
        since: DateTime<Utc>,
    ) -> Result<Vec<StoredArticle>, FeedError>;

    /// All articles for a stock, newest first.
    async fn articles_for_stock(&self, stock_id: i64) -> Result<Vec<NewsArticle>, FeedError>;

    /// All articles whose topic label contains `tag`, newest first.
    async fn articles_for_topic(&self, tag: &str) -> Result<Vec<NewsArticle>, FeedError>;

    /// Bulk-inserts articles, silently skipping rows that violate the
    /// store's uniqueness rules, and returns the number actually inserted.
    async fn insert_articles(&self, articles: &[NewsArticle]) -> Result<u64, FeedError>;
}
