use chrono::{DateTime, Utc};
use serde::Serialize;

/* ----- QUOTES (shared by quote/ and ingest/) ----- */

/// The latest daily open/close for a symbol, as returned by the quote
/// provider.
///
/// Prices stay decimal strings so the provider's precision survives
/// untouched; callers who need arithmetic parse them on their side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockQuote {
    /// Canonical ticker symbol, uppercased.
    pub symbol: String,
    /// Opening price of the latest daily bar.
    pub open_price: String,
    /// Closing price of the latest daily bar.
    pub close_price: String,
}

/* ----- NEWS (shared by news/, topics/ and ingest/) ----- */

/// A candidate article as normalized from a news provider, before
/// de-duplication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FetchedArticle {
    /// The headline.
    pub title: String,
    /// Direct link to the article; also the de-duplication identifier.
    pub url: String,
    /// The publisher (e.g. "Reuters").
    pub source: String,
    /// Publish time in UTC.
    pub published_at: DateTime<Utc>,
    /// Banner/photo URL, when the provider attached one.
    pub image_url: Option<String>,
    /// Topic tags the provider attached to this specific article.
    /// Empty for the per-symbol news path.
    pub tags: Vec<String>,
}

/// The insert shape ingestion hands to the repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsArticle {
    /// The stock this article is associated with; `None` for topic-only
    /// articles.
    pub stock_id: Option<i64>,
    /// The headline.
    pub title: String,
    /// Publish time in UTC.
    pub date: DateTime<Utc>,
    /// Topic label: a fixed marker for per-symbol news, the comma-joined
    /// provider tags for topic news.
    pub topic: String,
    /// The publisher.
    pub source: String,
    /// Direct link to the article.
    pub url: String,
    /// Banner/photo URL, if any.
    pub banner_url: Option<String>,
}

/* ----- INGESTION ----- */

/// Outcome of one ingestion pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IngestReport {
    /// Number of articles actually inserted.
    pub count: u64,
}
