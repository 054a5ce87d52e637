#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;

use shortener_client::domain::HttpTransport;
use shortener_client::prelude::*;

/// One request observed by the stub transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub path: String,
    pub body: Option<Value>,
}

/// Scripted in-memory transport.
///
/// Answers requests from a queue of canned results (FIFO) and records every
/// request it sees, so tests can assert both which calls were issued and
/// how the facades digested the answers.
#[derive(Default)]
pub struct StubTransport {
    responses: Mutex<VecDeque<ApiResult<Option<Value>>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful JSON response.
    pub fn push_ok(&self, body: Value) {
        self.responses.lock().push_back(Ok(Some(body)));
    }

    /// Queues a successful empty-body response.
    pub fn push_empty(&self) {
        self.responses.lock().push_back(Ok(None));
    }

    /// Queues a failure.
    pub fn push_err(&self, error: ApiError) {
        self.responses.lock().push_back(Err(error));
    }

    /// Returns every request observed so far.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }

    /// Returns how many requests were issued.
    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }

    fn answer(&self, method: &'static str, path: &str, body: Option<Value>) -> ApiResult<Option<Value>> {
        self.requests.lock().push(RecordedRequest {
            method,
            path: path.to_string(),
            body,
        });
        self.responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted response for {} {}", method, path))
    }
}

#[async_trait]
impl HttpTransport for StubTransport {
    async fn get_json(&self, path: &str) -> ApiResult<Option<Value>> {
        self.answer("GET", path, None)
    }

    async fn post_json(&self, path: &str, body: Value) -> ApiResult<Option<Value>> {
        self.answer("POST", path, Some(body))
    }
}

/// Builds a client over a fresh stub transport.
pub fn create_test_client() -> (ShortenerClient<StubTransport>, Arc<StubTransport>) {
    let transport = Arc::new(StubTransport::new());
    let client = ShortenerClient::with_transport(transport.clone());
    (client, transport)
}
