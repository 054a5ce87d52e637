//! Statistics endpoints adapter.

use std::sync::Arc;

use crate::application::adapters::dto::{
    self, CodeSummaryDto, StatsDto, StatsPageDto, StatsSummaryDto,
};
use crate::domain::entities::{CodeSummary, StatsPage, StatsRecord, StatsSummary};
use crate::domain::transport::HttpTransport;
use crate::error::ApiResult;

/// Adapter for the statistics endpoints: single lookup, paginated listing,
/// and access summaries.
pub struct StatsAdapter<T: HttpTransport> {
    transport: Arc<T>,
}

impl<T: HttpTransport> StatsAdapter<T> {
    /// Creates a new statistics adapter.
    pub fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Fetches access statistics for a single code.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::ApiError::EmptyResponse`] /
    /// [`crate::error::ApiError::InvalidResponse`] on validation failure and
    /// propagates transport failures (404 when the code is unknown).
    pub async fn get_by_code(&self, code: &str) -> ApiResult<StatsRecord> {
        let path = format!("/api/stats/{}", urlencoding::encode(code));
        let response = self.transport.get_json(&path).await?;
        Ok(dto::decode::<StatsDto>(response)?.into_domain())
    }

    /// Fetches one page of the statistics listing.
    pub async fn list(&self, page: u32, size: u32) -> ApiResult<StatsPage> {
        let path = format!("/api/stats?page={}&size={}", page, size);
        let response = self.transport.get_json(&path).await?;
        Ok(dto::decode::<StatsPageDto>(response)?.into_domain())
    }

    /// Fetches the service-wide access summary.
    pub async fn summary(&self) -> ApiResult<StatsSummary> {
        let response = self.transport.get_json("/api/stats/summary").await?;
        Ok(dto::decode::<StatsSummaryDto>(response)?.into_domain())
    }

    /// Fetches the access summary for a single code.
    pub async fn summary_by_code(&self, code: &str) -> ApiResult<CodeSummary> {
        let path = format!("/api/stats/{}/summary", urlencoding::encode(code));
        let response = self.transport.get_json(&path).await?;
        Ok(dto::decode::<CodeSummaryDto>(response)?.into_domain())
    }
}
