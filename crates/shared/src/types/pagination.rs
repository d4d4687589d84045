//! Pagination types for upstream list endpoints.

use serde::{Deserialize, Serialize};

/// Request parameters for paginated queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-indexed).
    #[serde(default = "default_page")]
    pub page: u32,
    /// Number of items per page.
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    100
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
        }
    }
}

impl PageRequest {
    /// Creates a request for the first page with the given page size.
    #[must_use]
    pub fn first(limit: u32) -> Self {
        Self {
            page: 1,
            limit: limit.max(1),
        }
    }

    /// Returns the request for the following page.
    #[must_use]
    pub const fn next(self) -> Self {
        Self {
            page: self.page.saturating_add(1),
            limit: self.limit,
        }
    }

    /// Query-string pairs understood by the upstream API.
    #[must_use]
    pub fn query_pairs(&self) -> [(&'static str, String); 2] {
        [("page", self.page.to_string()), ("limit", self.limit.to_string())]
    }
}

/// Pagination metadata returned alongside a page of records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// Current page number.
    #[serde(default = "default_page")]
    pub page: u32,
    /// Items per page.
    #[serde(default = "default_limit", alias = "perPage", alias = "per_page")]
    pub limit: u32,
    /// Total number of items across all pages.
    #[serde(default)]
    pub total: u64,
    /// Total number of pages.
    #[serde(default, alias = "total_pages", alias = "pages")]
    pub total_pages: u32,
}

impl PageMeta {
    /// Builds metadata from raw counts, deriving the page count.
    #[must_use]
    pub fn from_counts(page: u32, limit: u32, total: u64) -> Self {
        let total_pages = if total == 0 || limit == 0 {
            1
        } else {
            u32::try_from(total.div_ceil(u64::from(limit))).unwrap_or(u32::MAX)
        };

        Self {
            page,
            limit,
            total,
            total_pages,
        }
    }

    /// Returns true if the upstream has pages after this one.
    #[must_use]
    pub fn has_next(&self) -> bool {
        let pages = if self.total_pages == 0 {
            Self::from_counts(self.page, self.limit, self.total).total_pages
        } else {
            self.total_pages
        };
        self.page < pages
    }
}

#[cfg(test)]
#[path = "pagination_tests.rs"]
mod tests;
