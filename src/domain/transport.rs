//! Transport trait abstracting the HTTP collaborator.
//!
//! The trait carries the tagged result the rest of the client relies on:
//! a successful exchange yields the decoded JSON body (or `None` for an
//! empty body), a failed one yields an [`ApiError::Transport`] with the
//! HTTP status when one was received. Adapters therefore never probe error
//! shapes for status codes; [`ApiError::status`] is the single source.
//!
//! [`ApiError::Transport`]: crate::error::ApiError::Transport
//! [`ApiError::status`]: crate::error::ApiError::status
//!
//! Paths handed to the transport are service-relative (`/api/...`); the
//! implementation resolves them to absolute URLs per deployment (see
//! [`crate::utils::origin`]).

use crate::error::ApiResult;
use async_trait::async_trait;
use serde_json::Value;

/// HTTP transport used by the response adapters.
///
/// # Contract
///
/// - `Ok(Some(value))` - 2xx response with a JSON body
/// - `Ok(None)` - 2xx response with an empty body
/// - `Err(Transport { status: Some(_), .. })` - non-2xx response
/// - `Err(Transport { status: None, .. })` - request never produced a
///   response (connection, DNS, timeout)
///
/// # Implementations
///
/// - [`crate::infrastructure::http::ReqwestTransport`] - production client
/// - Test mocks available with `cfg(test)`; integration tests use a
///   recording stub (see `tests/common/`)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issues a GET request for a JSON resource.
    ///
    /// # Errors
    ///
    /// Returns a `Transport` failure on any non-2xx status or network
    /// failure.
    async fn get_json(&self, path: &str) -> ApiResult<Option<Value>>;

    /// Issues a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns a `Transport` failure on any non-2xx status or network
    /// failure.
    async fn post_json(&self, path: &str, body: Value) -> ApiResult<Option<Value>>;
}
