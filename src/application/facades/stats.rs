//! Facade for single-code statistics lookup.

use std::sync::Arc;

use crate::application::adapters::StatsAdapter;
use crate::application::facades::classify::{Operation, user_message};
use crate::application::facades::state::{OperationSlot, OperationState};
use crate::domain::entities::StatsRecord;
use crate::domain::transport::HttpTransport;

/// State store for the single-stats lookup feature.
pub struct StatsFacade<T: HttpTransport> {
    adapter: StatsAdapter<T>,
    state: OperationSlot<StatsRecord>,
}

impl<T: HttpTransport> StatsFacade<T> {
    /// Creates a new stats facade.
    pub fn new(transport: Arc<T>) -> Self {
        Self {
            adapter: StatsAdapter::new(transport),
            state: OperationSlot::new(),
        }
    }

    /// Fetches access statistics for a code.
    pub async fn fetch_stats(&self, code: &str) {
        self.state.start();
        match self.adapter.get_by_code(code).await {
            Ok(record) => self.state.succeed(record),
            Err(e) => {
                tracing::debug!(error = %e, code, "stats lookup failed");
                self.state.fail(user_message(Operation::StatsLookup, &e));
            }
        }
    }

    /// Returns the slot to idle.
    pub fn reset(&self) {
        self.state.reset();
    }

    /// Returns whether a lookup is in flight.
    pub fn loading(&self) -> bool {
        self.state.loading()
    }

    /// Returns the classified error of the last lookup, if it failed.
    pub fn error(&self) -> Option<String> {
        self.state.error()
    }

    /// Returns the record of the last lookup, if it succeeded.
    pub fn stats(&self) -> Option<StatsRecord> {
        self.state.data()
    }

    /// Returns a snapshot of the whole tri-state bundle.
    pub fn state(&self) -> OperationState<StatsRecord> {
        self.state.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::transport::MockHttpTransport;
    use crate::error::ApiError;
    use serde_json::json;

    #[tokio::test]
    async fn test_fetch_success_stores_record() {
        let mut transport = MockHttpTransport::new();
        transport.expect_get_json().return_once(|_| {
            Ok(Some(json!({
                "code": "abc12",
                "originalUrl": "https://example.com",
                "hits": 42,
            })))
        });

        let facade = StatsFacade::new(Arc::new(transport));
        facade.fetch_stats("abc12").await;

        let record = facade.stats().unwrap();
        assert_eq!(record.hits, 42);
        assert!(facade.error().is_none());
    }

    #[tokio::test]
    async fn test_unknown_code_maps_to_not_found() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_get_json()
            .return_once(|_| Err(ApiError::http_status(404, "HTTP 404")));

        let facade = StatsFacade::new(Arc::new(transport));
        facade.fetch_stats("zzzzz").await;

        assert_eq!(facade.error().as_deref(), Some("URL not found"));
        assert!(facade.stats().is_none());
    }

    #[tokio::test]
    async fn test_other_failures_use_generic_message() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_get_json()
            .return_once(|_| Err(ApiError::http_status(500, "HTTP 500")));

        let facade = StatsFacade::new(Arc::new(transport));
        facade.fetch_stats("abc12").await;

        assert_eq!(facade.error().as_deref(), Some("error querying statistics"));
    }

    #[tokio::test]
    async fn test_invalid_payload_uses_generic_message() {
        let mut transport = MockHttpTransport::new();
        transport.expect_get_json().return_once(|_| {
            Ok(Some(json!({
                "code": "abc12",
                "originalUrl": "https://example.com",
                "hits": "42",
            })))
        });

        let facade = StatsFacade::new(Arc::new(transport));
        facade.fetch_stats("abc12").await;

        assert_eq!(facade.error().as_deref(), Some("error querying statistics"));
        assert!(facade.stats().is_none());
    }
}
