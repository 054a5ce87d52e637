//! Response adapters converting raw JSON into validated domain values.
//!
//! Each adapter owns one endpoint family: it builds the request path, calls
//! the transport, and converts the body into a domain value through the
//! strict wire DTOs in [`dto`]. Adapters never catch failures; everything
//! propagates to the facades, the sole layer that classifies errors.
//!
//! # Available Adapters
//!
//! - [`ShortenAdapter`] - Short link creation
//! - [`StatsAdapter`] - Statistics lookup, listing, and summaries
//! - [`RankingAdapter`] - Most-visited ranking

pub mod dto;
pub mod ranking;
pub mod shorten;
pub mod stats;

pub use ranking::RankingAdapter;
pub use shorten::{ShortenAdapter, ShortenRequest};
pub use stats::StatsAdapter;
