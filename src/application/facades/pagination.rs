//! Pagination navigation guard.
//!
//! Pure admission decisions for page navigation. The guard keeps boundary
//! calls idempotent no-ops instead of out-of-range requests: advancing past
//! the last page or retreating before the first simply yields no target.

use crate::domain::entities::StatsPage;

/// Page size used before the caller picks one.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Current pagination position: 0-based page index and page size.
///
/// Updated from server-reported metadata after each successful fetch, so a
/// clamped request converges on what the server actually returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    pub number: u32,
    pub size: u32,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self {
            number: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Decides whether advancing a page is permitted.
///
/// Forbidden when no page has been loaded yet or the last known page is
/// flagged `last`. Otherwise targets (current + 1) at the current size.
pub fn next_target(last_page: Option<&StatsPage>, cursor: PageCursor) -> Option<PageCursor> {
    let page = last_page?;
    if page.last {
        return None;
    }
    Some(PageCursor {
        number: cursor.number + 1,
        size: cursor.size,
    })
}

/// Decides whether retreating a page is permitted.
///
/// Forbidden when no page has been loaded yet or the last known page is
/// flagged `first`. Otherwise targets (current - 1) at the current size.
pub fn prev_target(last_page: Option<&StatsPage>, cursor: PageCursor) -> Option<PageCursor> {
    let page = last_page?;
    if page.first {
        return None;
    }
    Some(PageCursor {
        number: cursor.number.saturating_sub(1),
        size: cursor.size,
    })
}

/// Sanitizes a requested page size.
///
/// Non-finite input yields `None` (the command becomes a silent no-op);
/// finite input is floored and clamped to a minimum of 1.
pub fn sanitize_size(raw: f64) -> Option<u32> {
    if !raw.is_finite() {
        return None;
    }
    // `as` saturates, so absurdly large requests clamp to u32::MAX.
    Some(raw.floor().max(1.0) as u32)
}
