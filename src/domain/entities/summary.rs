//! Access summary entities (totals plus last-7-days daily buckets).

use chrono::NaiveDate;

/// Hit count for a single UTC calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayHits {
    pub date: NaiveDate,
    pub hits: u64,
}

impl DayHits {
    /// Creates a new DayHits instance.
    pub fn new(date: NaiveDate, hits: u64) -> Self {
        Self { date, hits }
    }
}

/// Service-wide access summary.
///
/// `daily` covers the last seven days in chronological order; the server
/// omits days with zero hits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsSummary {
    pub total_hits: u64,
    pub last7_days_hits: u64,
    pub daily: Vec<DayHits>,
}

/// Access summary scoped to a single short code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeSummary {
    pub code: String,
    pub original_url: String,
    pub total_hits: u64,
    pub last7_days_hits: u64,
    pub daily: Vec<DayHits>,
}
