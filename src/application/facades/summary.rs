//! Facade for access summaries (service-wide and per-code).

use std::sync::Arc;

use crate::application::adapters::StatsAdapter;
use crate::application::facades::classify::{Operation, user_message};
use crate::application::facades::state::{OperationSlot, OperationState};
use crate::domain::entities::{CodeSummary, StatsSummary};
use crate::domain::transport::HttpTransport;

/// State store for the summary feature.
///
/// Holds two independent slots: the service-wide summary and the per-code
/// one. Each runs its own tri-state cycle; neither disturbs the other.
pub struct SummaryFacade<T: HttpTransport> {
    adapter: StatsAdapter<T>,
    summary: OperationSlot<StatsSummary>,
    code_summary: OperationSlot<CodeSummary>,
}

impl<T: HttpTransport> SummaryFacade<T> {
    /// Creates a new summary facade.
    pub fn new(transport: Arc<T>) -> Self {
        Self {
            adapter: StatsAdapter::new(transport),
            summary: OperationSlot::new(),
            code_summary: OperationSlot::new(),
        }
    }

    /// Fetches the service-wide access summary.
    pub async fn fetch_summary(&self) {
        self.summary.start();
        match self.adapter.summary().await {
            Ok(summary) => self.summary.succeed(summary),
            Err(e) => {
                tracing::debug!(error = %e, "summary fetch failed");
                self.summary.fail(user_message(Operation::Summary, &e));
            }
        }
    }

    /// Fetches the access summary for a single code.
    pub async fn fetch_code_summary(&self, code: &str) {
        self.code_summary.start();
        match self.adapter.summary_by_code(code).await {
            Ok(summary) => self.code_summary.succeed(summary),
            Err(e) => {
                tracing::debug!(error = %e, code, "code summary fetch failed");
                self.code_summary
                    .fail(user_message(Operation::CodeSummary, &e));
            }
        }
    }

    /// Returns the service-wide slot to idle.
    pub fn reset_summary(&self) {
        self.summary.reset();
    }

    /// Returns the per-code slot to idle.
    pub fn reset_code_summary(&self) {
        self.code_summary.reset();
    }

    /// Returns whether the service-wide fetch is in flight.
    pub fn summary_loading(&self) -> bool {
        self.summary.loading()
    }

    /// Returns the classified error of the service-wide fetch, if any.
    pub fn summary_error(&self) -> Option<String> {
        self.summary.error()
    }

    /// Returns the last service-wide summary, if any.
    pub fn summary(&self) -> Option<StatsSummary> {
        self.summary.data()
    }

    /// Returns whether the per-code fetch is in flight.
    pub fn code_summary_loading(&self) -> bool {
        self.code_summary.loading()
    }

    /// Returns the classified error of the per-code fetch, if any.
    pub fn code_summary_error(&self) -> Option<String> {
        self.code_summary.error()
    }

    /// Returns the last per-code summary, if any.
    pub fn code_summary(&self) -> Option<CodeSummary> {
        self.code_summary.data()
    }

    /// Returns a snapshot of the service-wide bundle.
    pub fn summary_state(&self) -> OperationState<StatsSummary> {
        self.summary.snapshot()
    }

    /// Returns a snapshot of the per-code bundle.
    pub fn code_summary_state(&self) -> OperationState<CodeSummary> {
        self.code_summary.snapshot()
    }
}
