//! Wire DTOs and strict conversion into domain values.
//!
//! Deserialization is deliberately strict: a field of the wrong primitive
//! type is rejected, never coerced (a numeric-looking string does not become
//! a number). This surfaces backend contract drift as
//! [`ApiError::InvalidResponse`] instead of silently accepting it.

use crate::domain::entities::{
    CodeSummary, DayHits, RankingEntry, ShortLink, StatsPage, StatsRecord, StatsSummary,
};
use crate::error::{ApiError, ApiResult};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decodes a transport body into a DTO.
///
/// # Errors
///
/// Returns [`ApiError::EmptyResponse`] when the body is absent or JSON
/// `null`, [`ApiError::InvalidResponse`] when it fails strict field-type
/// validation.
pub(crate) fn decode<T: DeserializeOwned>(body: Option<Value>) -> ApiResult<T> {
    match body {
        None | Some(Value::Null) => Err(ApiError::EmptyResponse),
        Some(value) => {
            serde_json::from_value(value).map_err(|e| ApiError::InvalidResponse(e.to_string()))
        }
    }
}

/// Wire shape of the shorten endpoint response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortLinkDto {
    pub id: i64,
    pub code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub short_url: Option<String>,
}

impl ShortLinkDto {
    /// Converts into the domain value, enforcing record invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidResponse`] when `id` is not positive or
    /// `code` is empty.
    pub fn into_domain(self) -> ApiResult<ShortLink> {
        if self.id <= 0 {
            return Err(ApiError::InvalidResponse(format!(
                "id must be a positive integer, got {}",
                self.id
            )));
        }
        if self.code.is_empty() {
            return Err(ApiError::InvalidResponse("code must be non-empty".into()));
        }
        // An empty shortUrl is treated as absent.
        let short_url = self.short_url.filter(|url| !url.is_empty());
        Ok(ShortLink::new(
            self.id,
            self.code,
            self.original_url,
            self.created_at,
            short_url,
        ))
    }
}

/// Wire shape of a single statistics record.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsDto {
    pub code: String,
    pub original_url: String,
    pub hits: u64,
}

impl StatsDto {
    /// Converts into the domain value.
    pub fn into_domain(self) -> StatsRecord {
        StatsRecord::new(self.code, self.original_url, self.hits)
    }
}

/// Wire shape of the server's page envelope.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsPageDto {
    pub content: Vec<StatsDto>,
    pub total_elements: u64,
    pub total_pages: u32,
    pub size: u32,
    pub number: u32,
    pub first: bool,
    pub last: bool,
    pub number_of_elements: u32,
    pub empty: bool,
}

impl StatsPageDto {
    /// Converts into the domain value.
    pub fn into_domain(self) -> StatsPage {
        StatsPage {
            content: self.content.into_iter().map(StatsDto::into_domain).collect(),
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            size: self.size,
            number: self.number,
            first: self.first,
            last: self.last,
            number_of_elements: self.number_of_elements,
            empty: self.empty,
        }
    }
}

/// Wire shape of one ranking entry.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingItemDto {
    pub code: String,
    pub hits: u64,
}

impl RankingItemDto {
    /// Converts into the domain value.
    pub fn into_domain(self) -> RankingEntry {
        RankingEntry::new(self.code, self.hits)
    }
}

/// Wire shape of one daily hit bucket.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayHitsDto {
    pub date: NaiveDate,
    pub hits: u64,
}

impl DayHitsDto {
    /// Converts into the domain value.
    pub fn into_domain(self) -> DayHits {
        DayHits::new(self.date, self.hits)
    }
}

/// Wire shape of the service-wide summary response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummaryDto {
    pub total_hits: u64,
    pub last7_days_hits: u64,
    pub daily: Vec<DayHitsDto>,
}

impl StatsSummaryDto {
    /// Converts into the domain value.
    pub fn into_domain(self) -> StatsSummary {
        StatsSummary {
            total_hits: self.total_hits,
            last7_days_hits: self.last7_days_hits,
            daily: self.daily.into_iter().map(DayHitsDto::into_domain).collect(),
        }
    }
}

/// Wire shape of the per-code summary response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeSummaryDto {
    pub code: String,
    pub original_url: String,
    pub total_hits: u64,
    pub last7_days_hits: u64,
    pub daily: Vec<DayHitsDto>,
}

impl CodeSummaryDto {
    /// Converts into the domain value.
    pub fn into_domain(self) -> CodeSummary {
        CodeSummary {
            code: self.code,
            original_url: self.original_url,
            total_hits: self.total_hits,
            last7_days_hits: self.last7_days_hits,
            daily: self.daily.into_iter().map(DayHitsDto::into_domain).collect(),
        }
    }
}
