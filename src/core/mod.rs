//! Core components shared by every endpoint module.
//!
//! This module contains the foundational building blocks of the crate:
//! - The main [`FeedClient`] and its builder.
//! - The primary [`FeedError`] type.
//! - Shared data models like [`StockQuote`] and [`NewsArticle`].

/// The main client (`FeedClient`), builder, and provider configuration.
pub mod client;
/// The primary error type (`FeedError`) for the crate.
pub mod error;
/// Shared data models used across multiple API modules.
pub mod models;

// convenient re-exports so most code can just `use crate::core::FeedClient`
pub use client::{FeedClient, FeedClientBuilder, Provider};
pub use error::FeedError;
pub use models::{FetchedArticle, IngestReport, NewsArticle, StockQuote};
