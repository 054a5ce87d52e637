//! Failure classification into fixed user-facing messages.
//!
//! The classifier is total: every (operation, failure) pair maps to exactly
//! one message from a closed set. Unmapped statuses fall through to the
//! operation's generic message, and validation failures carry no status at
//! all, so raw error text never leaks into facade state.

use crate::error::ApiError;

/// The logical operation a failure occurred in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Submit a new short link.
    Shorten,
    /// Look up statistics for a single code.
    StatsLookup,
    /// Fetch one page of the statistics listing.
    StatsList,
    /// Fetch the most-visited ranking.
    Ranking,
    /// Fetch the service-wide access summary.
    Summary,
    /// Fetch the access summary for a single code.
    CodeSummary,
}

/// Maps a failure to the user-facing message stored in facade state.
pub fn user_message(operation: Operation, error: &ApiError) -> &'static str {
    match (operation, error.status()) {
        (Operation::Shorten, Some(400)) => "invalid URL",
        (Operation::Shorten, Some(409)) => "code already in use",
        (Operation::Shorten, _) => "error shortening URL",
        (Operation::StatsLookup, Some(404)) => "URL not found",
        (Operation::StatsLookup, _) => "error querying statistics",
        (Operation::StatsList, _) => "error loading paginated statistics",
        (Operation::Ranking, _) => "error loading ranking",
        (Operation::CodeSummary, Some(404)) => "URL not found",
        (Operation::Summary, _) | (Operation::CodeSummary, _) => "error loading summary",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorten_status_mapping() {
        let bad_request = ApiError::http_status(400, "HTTP 400");
        let conflict = ApiError::http_status(409, "HTTP 409");
        let server_error = ApiError::http_status(500, "HTTP 500");

        assert_eq!(user_message(Operation::Shorten, &bad_request), "invalid URL");
        assert_eq!(
            user_message(Operation::Shorten, &conflict),
            "code already in use"
        );
        assert_eq!(
            user_message(Operation::Shorten, &server_error),
            "error shortening URL"
        );
    }

    #[test]
    fn test_stats_lookup_mapping() {
        let not_found = ApiError::http_status(404, "HTTP 404");
        let no_status = ApiError::connection("connection refused");

        assert_eq!(
            user_message(Operation::StatsLookup, &not_found),
            "URL not found"
        );
        assert_eq!(
            user_message(Operation::StatsLookup, &no_status),
            "error querying statistics"
        );
    }

    #[test]
    fn test_list_operations_ignore_status() {
        let not_found = ApiError::http_status(404, "HTTP 404");

        assert_eq!(
            user_message(Operation::Ranking, &not_found),
            "error loading ranking"
        );
        assert_eq!(
            user_message(Operation::StatsList, &not_found),
            "error loading paginated statistics"
        );
    }

    #[test]
    fn test_validation_failures_use_generic_message() {
        assert_eq!(
            user_message(Operation::Shorten, &ApiError::EmptyResponse),
            "error shortening URL"
        );
        assert_eq!(
            user_message(
                Operation::StatsLookup,
                &ApiError::InvalidResponse("hits: wrong type".into())
            ),
            "error querying statistics"
        );
    }

    #[test]
    fn test_summary_mapping() {
        let not_found = ApiError::http_status(404, "HTTP 404");
        let server_error = ApiError::http_status(500, "HTTP 500");

        assert_eq!(
            user_message(Operation::CodeSummary, &not_found),
            "URL not found"
        );
        assert_eq!(
            user_message(Operation::CodeSummary, &server_error),
            "error loading summary"
        );
        assert_eq!(
            user_message(Operation::Summary, &not_found),
            "error loading summary"
        );
    }
}
