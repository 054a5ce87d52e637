//! Facade for the paginated statistics listing.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::application::adapters::StatsAdapter;
use crate::application::facades::classify::{Operation, user_message};
use crate::application::facades::pagination::{self, PageCursor};
use crate::application::facades::state::{OperationSlot, OperationState};
use crate::domain::entities::StatsPage;
use crate::domain::transport::HttpTransport;

/// State store for the paginated listing feature.
///
/// Besides the tri-state slot it tracks a pagination cursor. The cursor is
/// fed from server-reported page metadata, not from the requested values, so
/// server-side clamping is adopted transparently. Navigation commands go
/// through the pagination guard and resolve as no-ops at the boundaries.
pub struct StatsListFacade<T: HttpTransport> {
    adapter: StatsAdapter<T>,
    page: OperationSlot<StatsPage>,
    cursor: RwLock<PageCursor>,
}

impl<T: HttpTransport> StatsListFacade<T> {
    /// Creates a new listing facade.
    pub fn new(transport: Arc<T>) -> Self {
        Self {
            adapter: StatsAdapter::new(transport),
            page: OperationSlot::new(),
            cursor: RwLock::new(PageCursor::default()),
        }
    }

    /// Fetches one page of the listing.
    pub async fn fetch_page(&self, number: u32, size: u32) {
        self.page.start();
        match self.adapter.list(number, size).await {
            Ok(page) => {
                *self.cursor.write() = PageCursor {
                    number: page.number,
                    size: page.size,
                };
                self.page.succeed(page);
            }
            Err(e) => {
                tracing::debug!(error = %e, number, size, "stats page fetch failed");
                self.page.fail(user_message(Operation::StatsList, &e));
            }
        }
    }

    /// Advances to the next page, if the guard permits it.
    ///
    /// A forbidden advance issues no request and mutates no state.
    pub async fn next_page(&self) {
        let target = {
            let data = self.page.data();
            pagination::next_target(data.as_ref(), *self.cursor.read())
        };
        if let Some(target) = target {
            self.fetch_page(target.number, target.size).await;
        }
    }

    /// Retreats to the previous page, if the guard permits it.
    pub async fn prev_page(&self) {
        let target = {
            let data = self.page.data();
            pagination::prev_target(data.as_ref(), *self.cursor.read())
        };
        if let Some(target) = target {
            self.fetch_page(target.number, target.size).await;
        }
    }

    /// Changes the page size and refetches from the first page.
    ///
    /// Non-finite input is a silent no-op; finite input is floored and
    /// clamped to a minimum of 1.
    pub async fn set_page_size(&self, size: f64) {
        if let Some(size) = pagination::sanitize_size(size) {
            self.fetch_page(0, size).await;
        }
    }

    /// Returns the slot and cursor to their initial state.
    pub fn reset(&self) {
        self.page.reset();
        *self.cursor.write() = PageCursor::default();
    }

    /// Returns whether a page fetch is in flight.
    pub fn loading(&self) -> bool {
        self.page.loading()
    }

    /// Returns the classified error of the last fetch, if it failed.
    pub fn error(&self) -> Option<String> {
        self.page.error()
    }

    /// Returns the last successfully loaded page, if any.
    pub fn page(&self) -> Option<StatsPage> {
        self.page.data()
    }

    /// Returns the current 0-based page index.
    pub fn page_number(&self) -> u32 {
        self.cursor.read().number
    }

    /// Returns the current page size.
    pub fn page_size(&self) -> u32 {
        self.cursor.read().size
    }

    /// Returns a snapshot of the whole tri-state bundle.
    pub fn state(&self) -> OperationState<StatsPage> {
        self.page.snapshot()
    }
}
