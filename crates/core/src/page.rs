//! Pagination.

use serde::{Deserialize, Serialize};

/// Page size used when none (or an unusable one) is requested.
pub const DEFAULT_PER_PAGE: u32 = 10;
/// Upper bound on page size.
pub const MAX_PER_PAGE: u32 = 100;

/// A 1-based page request. Construct through [`PageRequest::new`] so the
/// bounds always hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    page: u32,
    per_page: u32,
}

impl PageRequest {
    /// Build a request, clamping out-of-range values.
    ///
    /// `page < 1` becomes 1, `per_page < 1` becomes [`DEFAULT_PER_PAGE`], and
    /// `per_page` is capped at [`MAX_PER_PAGE`].
    pub fn new(page: Option<i64>, per_page: Option<i64>) -> Self {
        let page = match page {
            Some(p) if p >= 1 => p.min(u32::MAX as i64) as u32,
            _ => 1,
        };
        let per_page = match per_page {
            Some(n) if n >= 1 => n.min(MAX_PER_PAGE as i64) as u32,
            _ => DEFAULT_PER_PAGE,
        };
        Self { page, per_page }
    }

    /// 1-based page number.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Items per page.
    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    /// SQL `LIMIT`.
    pub fn limit(&self) -> i64 {
        self.per_page as i64
    }

    /// SQL `OFFSET`.
    pub fn offset(&self) -> i64 {
        (self.page as i64 - 1) * self.per_page as i64
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// One page of results plus the total match count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Total matching rows across all pages.
    pub total: u64,
    /// Page number that was served.
    pub page: u32,
    /// Page size that was served.
    pub per_page: u32,
    /// Rows on this page.
    pub resources: Vec<T>,
}

impl<T> Page<T> {
    /// Assemble a page for `request`.
    pub fn new(request: PageRequest, total: u64, resources: Vec<T>) -> Self {
        Self {
            total,
            page: request.page(),
            per_page: request.per_page(),
            resources,
        }
    }
}
