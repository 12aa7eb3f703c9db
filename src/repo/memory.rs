use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::core::{FeedError, NewsArticle, StockQuote};
use crate::repo::{ArticleScope, NewsRepository, StoredArticle, StoredStock};

/// In-memory [`NewsRepository`] with the same observable behavior as a
/// relational backend: monotonically assigned stock ids and a bulk insert
/// that de-duplicates by URL within the submitted batch.
///
/// Intended for tests and prototyping; nothing is persisted across process
/// restarts.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    inner: RwLock<Tables>,
}

#[derive(Debug, Default)]
struct Tables {
    stocks: Vec<StoredStock>,
    articles: Vec<NewsArticle>,
    next_stock_id: i64,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every stored article, in insertion order.
    pub async fn all_articles(&self) -> Vec<NewsArticle> {
        self.inner.read().await.articles.clone()
    }
}

#[async_trait]
impl NewsRepository for MemoryRepository {
    async fn find_stock(&self, symbol: &str) -> Result<Option<StoredStock>, FeedError> {
        let tables = self.inner.read().await;
        Ok(tables.stocks.iter().find(|s| s.symbol == symbol).cloned())
    }

    async fn create_stock(&self, quote: &StockQuote) -> Result<StoredStock, FeedError> {
        let mut tables = self.inner.write().await;
        tables.next_stock_id += 1;
        let stock = StoredStock {
            id: tables.next_stock_id,
            symbol: quote.symbol.clone(),
            open_price: quote.open_price.clone(),
            close_price: quote.close_price.clone(),
        };
        tables.stocks.push(stock.clone());
        Ok(stock)
    }

    async fn has_articles_for(&self, stock_id: i64) -> Result<bool, FeedError> {
        let tables = self.inner.read().await;
        Ok(tables
            .articles
            .iter()
            .any(|a| a.stock_id == Some(stock_id)))
    }

    async fn recent_articles(
        &self,
        scope: ArticleScope,
        since: DateTime<Utc>,
    ) -> Result<Vec<StoredArticle>, FeedError> {
        let tables = self.inner.read().await;
        Ok(tables
            .articles
            .iter()
            .filter(|a| a.date >= since)
            .filter(|a| match scope {
                ArticleScope::ForStockOrGlobal(id) => {
                    a.stock_id == Some(id) || a.stock_id.is_none()
                }
                ArticleScope::All => true,
            })
            .map(|a| StoredArticle {
                title: a.title.clone(),
                url: a.url.clone(),
                date: a.date,
            })
            .collect())
    }

    async fn articles_for_stock(&self, stock_id: i64) -> Result<Vec<NewsArticle>, FeedError> {
        let tables = self.inner.read().await;
        let mut out: Vec<NewsArticle> = tables
            .articles
            .iter()
            .filter(|a| a.stock_id == Some(stock_id))
            .cloned()
            .collect();
        out.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(out)
    }

    async fn articles_for_topic(&self, tag: &str) -> Result<Vec<NewsArticle>, FeedError> {
        let tables = self.inner.read().await;
        let mut out: Vec<NewsArticle> = tables
            .articles
            .iter()
            .filter(|a| a.topic.contains(tag))
            .cloned()
            .collect();
        out.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(out)
    }

    async fn insert_articles(&self, articles: &[NewsArticle]) -> Result<u64, FeedError> {
        let mut tables = self.inner.write().await;
        let mut inserted = 0u64;
        let batch_start = tables.articles.len();
        for article in articles {
            // skip-duplicates semantics: a URL already submitted in this
            // batch is dropped rather than rejected
            let dup_in_batch = tables.articles[batch_start..]
                .iter()
                .any(|a| a.url == article.url);
            if dup_in_batch {
                continue;
            }
            tables.articles.push(article.clone());
            inserted += 1;
        }
        Ok(inserted)
    }
}
