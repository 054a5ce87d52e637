//! Ranking endpoint adapter.

use std::sync::Arc;

use crate::application::adapters::dto::{self, RankingItemDto};
use crate::domain::entities::RankingEntry;
use crate::domain::transport::HttpTransport;
use crate::error::ApiResult;
use serde_json::Value;

/// Adapter for the most-visited ranking endpoint.
pub struct RankingAdapter<T: HttpTransport> {
    transport: Arc<T>,
}

impl<T: HttpTransport> RankingAdapter<T> {
    /// Creates a new ranking adapter.
    pub fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Fetches the ranking, preserving server order.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::ApiError::InvalidResponse`] when any element
    /// fails validation (no partial results) and propagates transport
    /// failures unchanged.
    pub async fn list(&self) -> ApiResult<Vec<RankingEntry>> {
        let response = self.transport.get_json("/api/ranking").await?;
        normalize(response)
    }
}

/// Normalizes the ranking body into an ordered sequence.
///
/// The endpoint may answer with an array, a bare object, or nothing at all;
/// a bare object becomes a one-element sequence and an absent/`null` body an
/// empty one. Every element is validated; one invalid element fails the
/// whole operation.
fn normalize(body: Option<Value>) -> ApiResult<Vec<RankingEntry>> {
    let items: Vec<RankingItemDto> = match body {
        None | Some(Value::Null) => Vec::new(),
        Some(value @ Value::Array(_)) => dto::decode(Some(value))?,
        Some(value) => vec![dto::decode(Some(value))?],
    };
    Ok(items.into_iter().map(RankingItemDto::into_domain).collect())
}
