//! # Shortener Client
//!
//! A typed, asynchronous client for a URL shortener HTTP API: submit short
//! links, query per-code statistics (single lookups and paginated listings),
//! fetch the most-visited ranking, and retrieve access summaries.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer
//! separation:
//!
//! - **Domain Layer** ([`domain`]) - Validated entities and the transport trait
//! - **Application Layer** ([`application`]) - Response adapters and reactive
//!   facades (tri-state loading/error/data stores)
//! - **Infrastructure Layer** ([`infrastructure`]) - Reqwest-backed transport
//!
//! ## Features
//!
//! - Strict response validation: wrong-typed fields are rejected, never coerced
//! - Fixed user-facing error messages; raw failures never leak into state
//! - Pagination guard making boundary navigation an idempotent no-op
//! - Environment-aware origin resolution (dev proxy, configured base URL,
//!   same-host fallback)
//!
//! ## Quick Start
//!
//! ```no_run
//! use shortener_client::prelude::*;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = ClientConfig::from_env()?;
//! let client = ShortenerClient::new(&config)?;
//!
//! let request = ShortenRequest::new("https://example.com", None)?;
//! client.shorten.create(&request).await;
//!
//! match (client.shorten.result(), client.shorten.error()) {
//!     (Some(link), _) => println!("created {}", link.code),
//!     (_, Some(message)) => eprintln!("{}", message),
//!     _ => {}
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! Configuration is loaded from environment variables via
//! [`config::ClientConfig`]. See [`config`] module for available options.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod utils;

pub mod client;
pub mod config;

pub use client::ShortenerClient;
pub use error::{ApiError, ApiResult};

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::adapters::ShortenRequest;
    pub use crate::application::facades::{
        OperationState, RankingFacade, ShortenFacade, StatsFacade, StatsListFacade, SummaryFacade,
    };
    pub use crate::client::ShortenerClient;
    pub use crate::config::{ClientConfig, RuntimeContext};
    pub use crate::domain::entities::{
        CodeSummary, DayHits, RankingEntry, ShortLink, StatsPage, StatsRecord, StatsSummary,
    };
    pub use crate::error::{ApiError, ApiResult};
}
