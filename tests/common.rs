#![allow(dead_code)]

use chrono::{DateTime, Duration, Utc};
use httpmock::MockServer;
use url::Url;

use stockfeed_rs::{
    FeedClient, MemoryRepository, NewsArticle, NewsRepository, Provider, StockQuote, StoredStock,
};

pub const RAPIDAPI_KEY: &str = "rapid-test-key";
pub const ALPHAVANTAGE_KEY: &str = "av-test-key";

pub fn setup_server() -> MockServer {
    MockServer::start()
}

/// A client with every provider base pointed at the mock server, on distinct
/// paths so one server can back all three endpoints.
pub fn test_client(server: &MockServer) -> FeedClient {
    let base = server.base_url();
    FeedClient::builder()
        .base_daily_series(Url::parse(&format!("{base}/daily")).unwrap())
        .base_stock_news(Url::parse(&format!("{base}/stock-news")).unwrap())
        .base_topic_feed(Url::parse(&format!("{base}/topic-feed")).unwrap())
        .credential(Provider::RapidApi, RAPIDAPI_KEY)
        .credential(Provider::AlphaVantage, ALPHAVANTAGE_KEY)
        .build()
        .unwrap()
}

pub fn days_ago(n: i64) -> DateTime<Utc> {
    Utc::now() - Duration::days(n)
}

/// Wire form of the per-symbol news provider's `post_time_utc`.
pub fn post_time(dt: DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Wire form of the topic feed's `time_published`.
pub fn feed_time(dt: DateTime<Utc>) -> String {
    dt.format("%Y%m%dT%H%M%S").to_string()
}

pub fn seed_article(
    stock_id: Option<i64>,
    title: &str,
    url: &str,
    date: DateTime<Utc>,
) -> NewsArticle {
    NewsArticle {
        stock_id,
        title: title.to_string(),
        date,
        topic: "Stock News".to_string(),
        source: "Seed Wire".to_string(),
        url: url.to_string(),
        banner_url: None,
    }
}

pub async fn seed_stock(repo: &MemoryRepository, symbol: &str) -> StoredStock {
    repo.create_stock(&StockQuote {
        symbol: symbol.to_string(),
        open_price: "100.0000".to_string(),
        close_price: "101.5000".to_string(),
    })
    .await
    .unwrap()
}

pub fn stock_news_item(title: &str, url: &str, posted: DateTime<Utc>) -> serde_json::Value {
    serde_json::json!({
        "article_title": title,
        "article_url": url,
        "article_photo_url": "https://img.example.com/banner.jpg",
        "source": "Example Wire",
        "post_time_utc": post_time(posted),
    })
}

pub fn stock_news_body(items: &[serde_json::Value]) -> String {
    serde_json::json!({
        "status": "OK",
        "request_id": "req-1",
        "data": { "news": items }
    })
    .to_string()
}
