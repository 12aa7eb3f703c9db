use chrono::{Duration, Utc};

use crate::core::{FeedClient, FeedError, IngestReport, NewsArticle};
use crate::ingest::dedup::DedupIndex;
use crate::news::SymbolNewsBuilder;
use crate::repo::{ArticleScope, NewsRepository};

/// Topic label attached to articles ingested through the per-symbol path.
pub(super) const STOCK_NEWS_TOPIC: &str = "Stock News";

pub(super) async fn ingest_symbol_news(
    client: &FeedClient,
    repo: &dyn NewsRepository,
    symbol: &str,
    window: Duration,
    max_candidates: u32,
) -> Result<IngestReport, FeedError> {
    let symbol = symbol.trim().to_uppercase();

    let stock = repo
        .find_stock(&symbol)
        .await?
        .ok_or_else(|| FeedError::NotFound(format!("stock `{symbol}` is not tracked")))?;

    // Compare against this stock's articles and the unassociated (topic-only)
    // ones, so a story already ingested through the topic path is not stored
    // twice.
    let since = Utc::now() - window;
    let existing = repo
        .recent_articles(ArticleScope::ForStockOrGlobal(stock.id), since)
        .await?;
    let index = DedupIndex::new(&existing);

    let candidates = SymbolNewsBuilder::new(client, &symbol)
        .count(max_candidates)
        .fetch()
        .await?;

    let fresh: Vec<NewsArticle> = candidates
        .into_iter()
        .filter(|c| index.is_new(c))
        .map(|c| NewsArticle {
            stock_id: Some(stock.id),
            title: c.title,
            date: c.published_at,
            topic: STOCK_NEWS_TOPIC.to_string(),
            source: c.source,
            url: c.url,
            banner_url: c.image_url,
        })
        .collect();

    if fresh.is_empty() {
        return Ok(IngestReport { count: 0 });
    }

    let count = repo.insert_articles(&fresh).await?;
    Ok(IngestReport { count })
}
