//! Facade for short link submission.

use std::sync::Arc;

use crate::application::adapters::{ShortenAdapter, ShortenRequest};
use crate::application::facades::classify::{Operation, user_message};
use crate::application::facades::state::{OperationSlot, OperationState};
use crate::domain::entities::ShortLink;
use crate::domain::transport::HttpTransport;

/// State store for the submission feature.
///
/// Owns a single operation slot; `create` runs the full
/// loading -> success/failure cycle and stores either the created link or a
/// classified message, never raw error text.
pub struct ShortenFacade<T: HttpTransport> {
    adapter: ShortenAdapter<T>,
    state: OperationSlot<ShortLink>,
}

impl<T: HttpTransport> ShortenFacade<T> {
    /// Creates a new shorten facade.
    pub fn new(transport: Arc<T>) -> Self {
        Self {
            adapter: ShortenAdapter::new(transport),
            state: OperationSlot::new(),
        }
    }

    /// Submits a short link request.
    ///
    /// Clears the previous result and error before issuing the request.
    pub async fn create(&self, request: &ShortenRequest) {
        self.state.start();
        match self.adapter.create(request).await {
            Ok(link) => self.state.succeed(link),
            Err(e) => {
                tracing::debug!(error = %e, "shorten request failed");
                self.state.fail(user_message(Operation::Shorten, &e));
            }
        }
    }

    /// Returns the slot to idle.
    pub fn reset(&self) {
        self.state.reset();
    }

    /// Returns whether a submission is in flight.
    pub fn loading(&self) -> bool {
        self.state.loading()
    }

    /// Returns the classified error of the last submission, if it failed.
    pub fn error(&self) -> Option<String> {
        self.state.error()
    }

    /// Returns the created link of the last submission, if it succeeded.
    pub fn result(&self) -> Option<ShortLink> {
        self.state.data()
    }

    /// Returns a snapshot of the whole tri-state bundle.
    pub fn state(&self) -> OperationState<ShortLink> {
        self.state.snapshot()
    }
}
