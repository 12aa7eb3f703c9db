use chrono::{DateTime, NaiveDateTime, Utc};

use crate::{
    core::{FeedClient, FeedError, FetchedArticle, Provider},
    topics::{Topic, wire},
};

pub(super) async fn fetch_topic_feed(
    client: &FeedClient,
    topics: &[Topic],
) -> Result<Vec<FetchedArticle>, FeedError> {
    let joined = topics
        .iter()
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join(",");

    let key = client.credential(Provider::AlphaVantage)?;
    let mut url = client.base_topic_feed().clone();
    url.query_pairs_mut()
        .append_pair("function", "NEWS_SENTIMENT")
        .append_pair("topics", &joined)
        .append_pair("apikey", key);

    let resp = client.http().get(url).send().await?;

    if !resp.status().is_success() {
        return Err(FeedError::Status {
            status: resp.status().as_u16(),
            url: resp.url().to_string(),
        });
    }

    let body = resp.text().await?;
    let envelope: wire::TopicFeedEnvelope = serde_json::from_str(&body)?;

    let feed = envelope
        .feed
        .ok_or_else(|| FeedError::Upstream("topic news response missing feed".into()))?;

    let articles = feed
        .into_iter()
        .filter_map(|raw| {
            let title = raw.title?;
            let url = raw.url?;
            let published_at = raw.time_published.as_deref().and_then(parse_feed_time)?;

            Some(FetchedArticle {
                title,
                url,
                source: raw.source.unwrap_or_default(),
                published_at,
                // the provider uses "" for "no banner"
                image_url: raw.banner_image.filter(|s| !s.is_empty()),
                tags: raw
                    .topics
                    .unwrap_or_default()
                    .into_iter()
                    .filter_map(|t| t.topic)
                    .collect(),
            })
        })
        .collect();

    Ok(articles)
}

/// Feed timestamps are machine-formatted as `YYYYMMDDThhmmss`, in UTC.
fn parse_feed_time(s: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(s, "%Y%m%dT%H%M%S")
        .ok()
        .map(|naive| naive.and_utc())
}
