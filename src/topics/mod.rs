mod api;
mod wire;

use std::fmt;
use std::str::FromStr;

use crate::core::{FeedClient, FeedError, FetchedArticle};

/// The closed set of topic tags the feed provider understands.
///
/// Parsing rejects anything else, so an unrecognized tag never reaches an
/// ingestion call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Topic {
    Blockchain,
    Earnings,
    Ipo,
    MergersAndAcquisitions,
    FinancialMarkets,
    EconomyFiscal,
    EconomyMonetary,
    EconomyMacro,
    EnergyTransportation,
    Finance,
    LifeSciences,
    Manufacturing,
    RealEstate,
    RetailWholesale,
    Technology,
}

impl Topic {
    /// All known tags, in the provider's vocabulary order.
    pub const ALL: [Topic; 15] = [
        Topic::Blockchain,
        Topic::Earnings,
        Topic::Ipo,
        Topic::MergersAndAcquisitions,
        Topic::FinancialMarkets,
        Topic::EconomyFiscal,
        Topic::EconomyMonetary,
        Topic::EconomyMacro,
        Topic::EnergyTransportation,
        Topic::Finance,
        Topic::LifeSciences,
        Topic::Manufacturing,
        Topic::RealEstate,
        Topic::RetailWholesale,
        Topic::Technology,
    ];

    /// The wire form the provider expects in the `topics` filter.
    pub const fn as_str(self) -> &'static str {
        match self {
            Topic::Blockchain => "blockchain",
            Topic::Earnings => "earnings",
            Topic::Ipo => "ipo",
            Topic::MergersAndAcquisitions => "mergers_and_acquisitions",
            Topic::FinancialMarkets => "financial_markets",
            Topic::EconomyFiscal => "economy_fiscal",
            Topic::EconomyMonetary => "economy_monetary",
            Topic::EconomyMacro => "economy_macro",
            Topic::EnergyTransportation => "energy_transportation",
            Topic::Finance => "finance",
            Topic::LifeSciences => "life_sciences",
            Topic::Manufacturing => "manufacturing",
            Topic::RealEstate => "real_estate",
            Topic::RetailWholesale => "retail_wholesale",
            Topic::Technology => "technology",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Topic {
    type Err = FeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Topic::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| FeedError::Validation(format!("unknown topic tag: `{s}`")))
    }
}

/// A builder for fetching the sentiment-annotated news feed filtered by one
/// or more topic tags.
pub struct TopicNewsBuilder {
    client: FeedClient,
    topics: Vec<Topic>,
}

impl TopicNewsBuilder {
    /// Creates a new `TopicNewsBuilder` for the given tags.
    pub fn new(client: &FeedClient, topics: &[Topic]) -> Self {
        Self {
            client: client.clone(),
            topics: topics.to_vec(),
        }
    }

    /// Executes the request and fetches the candidate articles.
    ///
    /// Each returned article carries the tags the provider attached to it,
    /// which may differ from the requested filter set. Items whose publish
    /// timestamp cannot be parsed are dropped.
    ///
    /// # Errors
    ///
    /// Returns `FeedError::Validation` when no tag was given,
    /// `FeedError::Upstream` when the payload lacks a feed, and a transport
    /// variant when the request itself fails.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(topics = self.topics.len())))]
    pub async fn fetch(self) -> Result<Vec<FetchedArticle>, FeedError> {
        if self.topics.is_empty() {
            return Err(FeedError::Validation(
                "at least one topic tag is required".into(),
            ));
        }
        api::fetch_topic_feed(&self.client, &self.topics).await
    }
}
