use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct TopicFeedEnvelope {
    pub(crate) feed: Option<Vec<FeedItem>>,
}

#[derive(Deserialize)]
pub(crate) struct FeedItem {
    pub(crate) title: Option<String>,
    pub(crate) url: Option<String>,
    pub(crate) source: Option<String>,
    pub(crate) time_published: Option<String>,
    pub(crate) banner_image: Option<String>,
    pub(crate) topics: Option<Vec<FeedTopic>>,
}

#[derive(Deserialize)]
pub(crate) struct FeedTopic {
    pub(crate) topic: Option<String>,
}
