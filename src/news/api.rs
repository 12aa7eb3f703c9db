use chrono::{DateTime, NaiveDateTime, Utc};

use crate::{
    core::{FeedClient, FeedError, FetchedArticle, Provider},
    news::wire,
};

pub(super) async fn fetch_symbol_news(
    client: &FeedClient,
    symbol: &str,
    count: u32,
    language: &str,
) -> Result<Vec<FetchedArticle>, FeedError> {
    let mut url = client.base_stock_news().clone();
    url.query_pairs_mut()
        .append_pair("symbol", symbol)
        .append_pair("language", language);

    let key = client.credential(Provider::RapidApi)?;
    let host = url.host_str().unwrap_or_default().to_string();

    let resp = client
        .http()
        .get(url)
        .header("x-rapidapi-key", key)
        .header("x-rapidapi-host", host)
        .send()
        .await?;

    if !resp.status().is_success() {
        return Err(FeedError::Status {
            status: resp.status().as_u16(),
            url: resp.url().to_string(),
        });
    }

    let body = resp.text().await?;
    let envelope: wire::StockNewsEnvelope = serde_json::from_str(&body)?;

    if envelope.status.as_deref() != Some("OK") {
        return Err(FeedError::Upstream(format!(
            "stock news provider returned status {:?}",
            envelope.status
        )));
    }

    let items = envelope
        .data
        .and_then(|d| d.news)
        .ok_or_else(|| FeedError::Upstream("stock news response missing news list".into()))?;

    let articles = items
        .into_iter()
        .filter_map(|raw| {
            let title = raw.article_title?;
            let url = raw.article_url?;
            let published_at = raw.post_time_utc.as_deref().and_then(parse_post_time)?;

            Some(FetchedArticle {
                title,
                url,
                source: raw.source.unwrap_or_default(),
                published_at,
                image_url: raw.article_photo_url,
                tags: Vec::new(),
            })
        })
        .take(count as usize)
        .collect();

    Ok(articles)
}

/// The provider publishes either RFC 3339 or a plain `%Y-%m-%d %H:%M:%S`
/// stamp; both are UTC.
fn parse_post_time(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
                .ok()
                .map(|naive| naive.and_utc())
        })
}
