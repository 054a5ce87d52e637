//! Reactive facades exposing tri-state views over each async operation.
//!
//! One facade per feature, each exclusively owning its operation slots.
//! A command runs `idle -> loading -> success | failure`; starting a command
//! clears the previous data *and* error before setting loading, and the
//! terminal state holds until the next command restarts the cycle. Failures
//! are stored as classified messages only (see [`classify`]); navigation
//! over paginated data goes through the guard in [`pagination`].
//!
//! Overlapping commands on the same slot are not serialized: both run and
//! the one that settles last wins the final state.
//!
//! # Available Facades
//!
//! - [`ShortenFacade`] - Short link submission
//! - [`StatsFacade`] - Single-code statistics lookup
//! - [`StatsListFacade`] - Paginated statistics listing
//! - [`RankingFacade`] - Most-visited ranking
//! - [`SummaryFacade`] - Access summaries

pub mod classify;
pub mod pagination;
pub mod ranking;
pub mod shorten;
pub mod state;
pub mod stats;
pub mod stats_list;
pub mod summary;

pub use ranking::RankingFacade;
pub use shorten::ShortenFacade;
pub use state::{OperationSlot, OperationState};
pub use stats::StatsFacade;
pub use stats_list::StatsListFacade;
pub use summary::SummaryFacade;
