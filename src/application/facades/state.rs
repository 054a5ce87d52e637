//! Tri-state store for one logical async operation.

use parking_lot::RwLock;

/// Snapshot of an operation: loading, failed, or completed with data.
///
/// At most one of `loading == true`, `error` present, or `data` present
/// reflects the latest operation. Starting a new operation clears `error`
/// and `data` before setting `loading`, so stale results are never visible
/// next to a fresh error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationState<T> {
    pub loading: bool,
    pub error: Option<String>,
    pub data: Option<T>,
}

impl<T> Default for OperationState<T> {
    fn default() -> Self {
        Self {
            loading: false,
            error: None,
            data: None,
        }
    }
}

/// Owned state slot with well-defined transitions.
///
/// Commands take `&self`; every transition is a single atomic lock
/// acquisition with no awaits inside, so overlapping commands interleave at
/// transition granularity and the last settled one wins.
#[derive(Debug)]
pub struct OperationSlot<T> {
    state: RwLock<OperationState<T>>,
}

impl<T: Clone> OperationSlot<T> {
    /// Creates an idle slot.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(OperationState::default()),
        }
    }

    /// Enters the loading state, clearing any previous error and data.
    pub fn start(&self) {
        let mut state = self.state.write();
        state.loading = true;
        state.error = None;
        state.data = None;
    }

    /// Completes with data, clearing loading.
    pub fn succeed(&self, data: T) {
        let mut state = self.state.write();
        state.loading = false;
        state.error = None;
        state.data = Some(data);
    }

    /// Completes with a user-facing error message, clearing loading.
    pub fn fail(&self, message: impl Into<String>) {
        let mut state = self.state.write();
        state.loading = false;
        state.data = None;
        state.error = Some(message.into());
    }

    /// Returns the slot to idle.
    pub fn reset(&self) {
        *self.state.write() = OperationState::default();
    }

    /// Returns a snapshot of the current state.
    pub fn snapshot(&self) -> OperationState<T> {
        self.state.read().clone()
    }

    /// Returns whether an operation is in flight.
    pub fn loading(&self) -> bool {
        self.state.read().loading
    }

    /// Returns the current user-facing error message, if any.
    pub fn error(&self) -> Option<String> {
        self.state.read().error.clone()
    }

    /// Returns the current data, if any.
    pub fn data(&self) -> Option<T> {
        self.state.read().data.clone()
    }
}

impl<T: Clone> Default for OperationSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}
