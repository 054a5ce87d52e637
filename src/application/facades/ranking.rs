//! Facade for the most-visited ranking listing.

use std::sync::Arc;

use crate::application::adapters::RankingAdapter;
use crate::application::facades::classify::{Operation, user_message};
use crate::application::facades::state::{OperationSlot, OperationState};
use crate::domain::entities::RankingEntry;
use crate::domain::transport::HttpTransport;

/// State store for the ranking feature.
pub struct RankingFacade<T: HttpTransport> {
    adapter: RankingAdapter<T>,
    state: OperationSlot<Vec<RankingEntry>>,
}

impl<T: HttpTransport> RankingFacade<T> {
    /// Creates a new ranking facade.
    pub fn new(transport: Arc<T>) -> Self {
        Self {
            adapter: RankingAdapter::new(transport),
            state: OperationSlot::new(),
        }
    }

    /// Fetches the ranking.
    pub async fn fetch_ranking(&self) {
        self.state.start();
        match self.adapter.list().await {
            Ok(entries) => self.state.succeed(entries),
            Err(e) => {
                tracing::debug!(error = %e, "ranking fetch failed");
                self.state.fail(user_message(Operation::Ranking, &e));
            }
        }
    }

    /// Returns the slot to idle.
    pub fn reset(&self) {
        self.state.reset();
    }

    /// Returns whether a fetch is in flight.
    pub fn loading(&self) -> bool {
        self.state.loading()
    }

    /// Returns the classified error of the last fetch, if it failed.
    pub fn error(&self) -> Option<String> {
        self.state.error()
    }

    /// Returns the entries of the last fetch, empty until one succeeds.
    pub fn ranking(&self) -> Vec<RankingEntry> {
        self.state.data().unwrap_or_default()
    }

    /// Returns a snapshot of the whole tri-state bundle.
    pub fn state(&self) -> OperationState<Vec<RankingEntry>> {
        self.state.snapshot()
    }
}
