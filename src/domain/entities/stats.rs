//! Usage statistics entities.

/// Access statistics for a single short code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsRecord {
    pub code: String,
    pub original_url: String,
    pub hits: u64,
}

impl StatsRecord {
    /// Creates a new StatsRecord instance.
    pub fn new(code: String, original_url: String, hits: u64) -> Self {
        Self {
            code,
            original_url,
            hits,
        }
    }
}

/// One page of a paginated statistics listing.
///
/// Mirrors the server's page envelope. The metadata is authoritative:
/// after a fetch the facade adopts `number` and `size` as its pagination
/// cursor, even when they differ from the requested values.
///
/// # Invariants (server-maintained)
///
/// - `first` is true iff `number == 0`
/// - `last` is true iff `number == total_pages - 1` (trivially true when
///   `total_pages <= 1`)
/// - `content.len() == number_of_elements`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsPage {
    pub content: Vec<StatsRecord>,
    pub total_elements: u64,
    pub total_pages: u32,
    pub size: u32,
    /// Current page index, 0-based.
    pub number: u32,
    pub first: bool,
    pub last: bool,
    pub number_of_elements: u32,
    pub empty: bool,
}
