use chrono::{Duration, Utc};

use crate::core::{FeedClient, FeedError, IngestReport, NewsArticle};
use crate::ingest::dedup::DedupIndex;
use crate::repo::{ArticleScope, NewsRepository};
use crate::topics::{Topic, TopicNewsBuilder};

pub(super) async fn ingest_topic_news(
    client: &FeedClient,
    repo: &dyn NewsRepository,
    topics: &[Topic],
    window: Duration,
) -> Result<IngestReport, FeedError> {
    // Topic articles are unassociated, so they are compared against every
    // recent article regardless of stock.
    let since = Utc::now() - window;
    let existing = repo.recent_articles(ArticleScope::All, since).await?;
    let index = DedupIndex::new(&existing);

    let candidates = TopicNewsBuilder::new(client, topics).fetch().await?;

    let fresh: Vec<NewsArticle> = candidates
        .into_iter()
        .filter(|c| index.is_new(c))
        .map(|c| NewsArticle {
            stock_id: None,
            title: c.title,
            date: c.published_at,
            // the tags the provider put on this article, not the requested
            // filter set
            topic: c.tags.join(", "),
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
