//! Public client surface + builder.
//!
//! The client owns one `reqwest::Client`, the per-provider base URLs (all
//! overridable, which is how the offline tests point at a mock server), and
//! the externally injected credentials. It is cheap to clone.

mod constants;

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use constants::{
    DEFAULT_BASE_DAILY_SERIES, DEFAULT_BASE_STOCK_NEWS, DEFAULT_BASE_TOPIC_FEED, USER_AGENT,
};
use reqwest::Client;
use url::Url;

use crate::core::FeedError;

/// External data providers that require a credential.
///
/// Credentials are injected at client construction time; no key literal ever
/// lives in this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Provider {
    /// The RapidAPI gateway, backing both the daily time series and the
    /// per-symbol news endpoints.
    RapidApi,
    /// The direct Alpha Vantage key, backing the topic news feed.
    AlphaVantage,
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Provider::RapidApi => "rapidapi",
            Provider::AlphaVantage => "alphavantage",
        })
    }
}

#[derive(Debug, Clone)]
pub struct FeedClient {
    http: Client,
    base_daily_series: Url,
    base_stock_news: Url,
    base_topic_feed: Url,
    credentials: HashMap<Provider, String>,
}

impl FeedClient {
    /// Create a new builder.
    pub fn builder() -> FeedClientBuilder {
        FeedClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_daily_series(&self) -> &Url {
        &self.base_daily_series
    }
    pub(crate) fn base_stock_news(&self) -> &Url {
        &self.base_stock_news
    }
    pub(crate) fn base_topic_feed(&self) -> &Url {
        &self.base_topic_feed
    }

    /// Look up the credential for a provider.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::MissingCredential`] when none was configured.
    pub(crate) fn credential(&self, provider: Provider) -> Result<&str, FeedError> {
        self.credentials
            .get(&provider)
            .map(String::as_str)
            .ok_or(FeedError::MissingCredential(provider))
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct FeedClientBuilder {
    user_agent: Option<String>,
    base_daily_series: Option<Url>,
    base_stock_news: Option<Url>,
    base_topic_feed: Option<Url>,
    credentials: HashMap<Provider, String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl FeedClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the daily time-series base (e.g. for a mock server).
    #[must_use]
    pub fn base_daily_series(mut self, url: Url) -> Self {
        self.base_daily_series = Some(url);
        self
    }

    /// Override the per-symbol news base.
    #[must_use]
    pub fn base_stock_news(mut self, url: Url) -> Self {
        self.base_stock_news = Some(url);
        self
    }

    /// Override the topic news feed base.
    #[must_use]
    pub fn base_topic_feed(mut self, url: Url) -> Self {
        self.base_topic_feed = Some(url);
        self
    }

    /// Inject the credential for a provider.
    #[must_use]
    pub fn credential(mut self, provider: Provider, key: impl Into<String>) -> Self {
        self.credentials.insert(provider, key.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns a `FeedError` if a default base URL fails to parse or the
    /// underlying HTTP client cannot be constructed.
    pub fn build(self) -> Result<FeedClient, FeedError> {
        let base_daily_series = match self.base_daily_series {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_DAILY_SERIES)?,
        };
        let base_stock_news = match self.base_stock_news {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_STOCK_NEWS)?,
        };
        let base_topic_feed = match self.base_topic_feed {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_TOPIC_FEED)?,
        };

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(FeedClient {
            http,
            base_daily_series,
            base_stock_news,
            base_topic_feed,
            credentials: self.credentials,
        })
    }
}
