//! stockfeed-rs: market-data ingestion core for portfolio trackers.
//!
//! Fetches daily quotes and finance news from external providers,
//! de-duplicates incoming articles against what was stored recently, and
//! persists the remainder through a pluggable [`repo::NewsRepository`].
//!
//! # Example
//!
//! ```no_run
//! # use std::sync::Arc;
//! # use stockfeed_rs::{FeedClient, Ingestor, MemoryRepository, Provider};
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = FeedClient::builder()
//!     .credential(Provider::RapidApi, "…")
//!     .credential(Provider::AlphaVantage, "…")
//!     .build()?;
//! let repo = Arc::new(MemoryRepository::new());
//! let ingestor = Ingestor::new(&client, repo);
//!
//! let stock = ingestor.ensure_stock("aapl").await?;
//! let report = ingestor.ingest_symbol_news(&stock.symbol).await?;
//! println!("stored {} new articles", report.count);
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod ingest;
pub mod news;
pub mod quote;
pub mod repo;
pub mod topics;

pub use crate::core::client::{FeedClient, FeedClientBuilder, Provider};
pub use crate::core::error::FeedError;
pub use crate::core::models::{FetchedArticle, IngestReport, NewsArticle, StockQuote};
pub use ingest::Ingestor;
pub use news::SymbolNewsBuilder;
pub use quote::{QuoteBuilder, lookup_quote};
pub use repo::{ArticleScope, MemoryRepository, NewsRepository, StoredArticle, StoredStock};
pub use topics::{Topic, TopicNewsBuilder};
