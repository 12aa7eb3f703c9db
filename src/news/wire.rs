use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct StockNewsEnvelope {
    pub(crate) status: Option<String>,
    pub(crate) data: Option<StockNewsData>,
}

#[derive(Deserialize)]
pub(crate) struct StockNewsData {
    pub(crate) news: Option<Vec<StockNewsItem>>,
}

#[derive(Deserialize)]
pub(crate) struct StockNewsItem {
    pub(crate) article_title: Option<String>,
    pub(crate) article_url: Option<String>,
    pub(crate) article_photo_url: Option<String>,
    pub(crate) source: Option<String>,
    pub(crate) post_time_utc: Option<String>,
}
