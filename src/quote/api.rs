use crate::{
    core::{FeedClient, FeedError, Provider, StockQuote},
    quote::wire,
};

pub(super) async fn fetch_daily_quote(
    client: &FeedClient,
    symbol: &str,
) -> Result<StockQuote, FeedError> {
    let mut url = client.base_daily_series().clone();
    url.query_pairs_mut()
        .append_pair("function", "TIME_SERIES_DAILY")
        .append_pair("symbol", symbol)
        .append_pair("outputsize", "compact")
        .append_pair("datatype", "json");

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
    let envelope: wire::DailySeriesEnvelope = serde_json::from_str(&body)?;

    // The provider signals an unknown symbol through an error field rather
    // than an HTTP status.
    if envelope.error_message.is_some() {
        return Err(FeedError::NotFound(format!(
            "quote provider has no data for `{symbol}`"
        )));
    }

    let meta = envelope
        .meta
        .ok_or_else(|| FeedError::Upstream("daily series response missing metadata".into()))?;
    let canonical = meta
        .symbol
        .ok_or_else(|| FeedError::Upstream("daily series metadata missing symbol".into()))?;

    let series = envelope.series.unwrap_or_default();
    // ISO-dated keys sort chronologically, so the last entry is the newest bar.
    let (_, bar) = series
        .iter()
        .next_back()
        .ok_or_else(|| FeedError::Upstream("daily series response has no bars".into()))?;

    Ok(StockQuote {
        symbol: canonical.to_uppercase(),
        open_price: bar.open.clone(),
        close_price: bar.close.clone(),
    })
}
