//! Core domain entities representing validated server data.
//!
//! Every entity is an immutable value constructed by the response adapters
//! after field-type validation; no entity is ever built from unvalidated
//! JSON directly. Facade state replaces whole values rather than patching
//! fields.
//!
//! # Entity Types
//!
//! - [`ShortLink`] - A newly created short link
//! - [`StatsRecord`] - Access statistics for one code
//! - [`StatsPage`] - One page of the paginated statistics listing
//! - [`RankingEntry`] - One entry of the most-visited ranking
//! - [`StatsSummary`] / [`CodeSummary`] - Aggregate access summaries

pub mod ranking;
pub mod short_link;
pub mod stats;
pub mod summary;

pub use ranking::RankingEntry;
pub use short_link::ShortLink;
pub use stats::{StatsPage, StatsRecord};
pub use summary::{CodeSummary, DayHits, StatsSummary};
