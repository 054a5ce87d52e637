//! Ranking entity for the most-visited codes listing.

/// A single entry in the most-visited ranking.
///
/// Ordering among entries is server-determined; the client preserves the
/// received order and never re-sorts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingEntry {
    pub code: String,
    pub hits: u64,
}

impl RankingEntry {
    /// Creates a new RankingEntry instance.
    pub fn new(code: String, hits: u64) -> Self {
        Self { code, hits }
    }
}
