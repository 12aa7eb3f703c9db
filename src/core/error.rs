use thiserror::Error;

use crate::core::client::Provider;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum FeedError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The response body could not be decoded as JSON.
    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The requested symbol or stock is unknown, either to a provider or to
    /// the local repository.
    #[error("not found: {0}")]
    NotFound(String),

    /// A provider reported a failure or returned a payload missing the
    /// structure this crate depends on.
    #[error("upstream provider failure: {0}")]
    Upstream(String),

    /// Caller-supplied input outside the accepted domain (e.g. an unknown
    /// topic tag).
    #[error("invalid input: {0}")]
    Validation(String),

    /// No credential was configured for the provider backing this call.
    #[error("no credential configured for {0}")]
    MissingCredential(Provider),

    /// A repository backend failed to read or write.
    #[error("storage error: {0}")]
    Storage(String),
}
