//! Query parameters and pagination utilities
//!
//! List requests carry `limit` and `page` as raw query strings so that
//! out-of-domain values come back as structured field violations rather
//! than an opaque deserialization rejection.

use serde::{Deserialize, Serialize};

use crate::config::PaginationConfig;
use crate::core::error::{FieldViolation, ValidationError};

/// Raw query parameters for the list operation
///
/// # Example
/// ```text
/// GET /stock?page=2&limit=10
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ListQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// Validated pagination parameters
///
/// `page` is 1-based. Out-of-range pages yield an empty page, not an
/// error; non-numeric, zero, or negative values never get this far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    pub page: usize,
    pub limit: usize,
}

impl PageParams {
    /// Validate raw query parameters against the pagination configuration
    ///
    /// Missing parameters take the configured defaults. A `limit` above
    /// the configured maximum is capped to the maximum; everything else
    /// out of domain is a field violation.
    pub fn from_query(query: &ListQuery, config: &PaginationConfig) -> Result<Self, ValidationError> {
        let mut violations = Vec::new();

        let page = match &query.page {
            None => config.default_page,
            Some(raw) => match raw.parse::<usize>() {
                Ok(page) if page >= 1 => page,
                _ => {
                    violations.push(FieldViolation::new("page", "must be a positive integer"));
                    config.default_page
                }
            },
        };

        let limit = match &query.limit {
            None => config.default_limit,
            Some(raw) => match raw.parse::<usize>() {
                Ok(limit) if limit >= 1 => limit.min(config.max_limit),
                _ => {
                    violations.push(FieldViolation::new("limit", "must be a positive integer"));
                    config.default_limit
                }
            },
        };

        if violations.is_empty() {
            Ok(Self { page, limit })
        } else {
            Err(ValidationError::FieldErrors(violations))
        }
    }

    /// Zero-based offset of the first item on this page
    pub fn offset(&self) -> usize {
        (self.page - 1) * self.limit
    }
}

/// Paginated response structure
///
/// Wraps one page of data with metadata about pagination state.
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    /// The paginated data
    pub data: Vec<T>,

    /// Pagination metadata
    pub pagination: PaginationMeta,
}

/// Pagination metadata
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    /// Current page number (starts at 1)
    pub page: usize,

    /// Number of items per page
    pub limit: usize,

    /// Total number of items
    pub total: usize,

    /// Total number of pages
    pub total_pages: usize,

    /// Whether there is a next page
    pub has_next: bool,

    /// Whether there is a previous page
    pub has_prev: bool,
}

impl PaginationMeta {
    /// Create pagination metadata from calculation
    pub fn new(page: usize, limit: usize, total: usize) -> Self {
        // Ensure limit is at least 1 to avoid division by zero
        let limit = limit.max(1);
        let total_pages = if total == 0 { 0 } else { total.div_ceil(limit) };
        let start = (page - 1) * limit;

        Self {
            page,
            limit,
            total,
            total_pages,
            has_next: start + limit < total,
            has_prev: page > 1,
        }
    }
}
