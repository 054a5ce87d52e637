//! Short link entity returned by the shorten endpoint.

use chrono::{DateTime, Utc};

/// A validated short link record.
///
/// Constructed exclusively by the response adapter; once built it is never
/// mutated. A new submission replaces the whole value in the facade state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub id: i64,
    pub code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    /// Fully qualified short URL, present only when the server sent a
    /// non-empty value.
    pub short_url: Option<String>,
}

impl ShortLink {
    /// Creates a new ShortLink instance.
    pub fn new(
        id: i64,
        code: String,
        original_url: String,
        created_at: DateTime<Utc>,
        short_url: Option<String>,
    ) -> Self {
        Self {
            id,
            code,
            original_url,
            created_at,
            short_url,
        }
    }
}
