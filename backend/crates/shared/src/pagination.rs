//! Pagination
//!
//! Page-number pagination shared by every list route, plus the response
//! envelope the backend uses for paginated payloads.

use serde::{Deserialize, Serialize};

use crate::error::app_error::{AppError, AppResult};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 20;
/// Upper bound used by most list routes
pub const MAX_PAGE_SIZE: u32 = 100;

/// Validated `page` / `page_size` pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    /// Parse raw query values.
    ///
    /// Missing values take the defaults. Invariants: `page >= 1` and
    /// `1 <= page_size <= max_page_size`; anything else is a 400.
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::pagination::PageRequest;
    ///
    /// let page = PageRequest::parse(Some("2"), Some("50"), 100).unwrap();
    /// assert_eq!((page.page, page.page_size), (2, 50));
    /// assert!(PageRequest::parse(Some("0"), None, 100).is_err());
    /// assert!(PageRequest::parse(None, Some("101"), 100).is_err());
    /// ```
    pub fn parse(
        page: Option<&str>,
        page_size: Option<&str>,
        max_page_size: u32,
    ) -> AppResult<Self> {
        let page = match page.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => raw
                .parse::<i64>()
                .map_err(|_| AppError::bad_request("page must be an integer"))?,
            None => i64::from(DEFAULT_PAGE),
        };
        let page_size = match page_size.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => raw
                .parse::<i64>()
                .map_err(|_| AppError::bad_request("page_size must be an integer"))?,
            None => i64::from(DEFAULT_PAGE_SIZE.min(max_page_size)),
        };

        if page < 1 || page > i64::from(u32::MAX) {
            return Err(AppError::bad_request("page must be greater than or equal to 1"));
        }
        if page_size < 1 || page_size > i64::from(max_page_size) {
            return Err(AppError::bad_request(format!(
                "page_size must be between 1 and {max_page_size}"
            )));
        }

        Ok(Self {
            page: page as u32,
            page_size: page_size as u32,
        })
    }

    /// Query pairs to forward upstream
    pub fn to_query(&self) -> [(&'static str, String); 2] {
        [
            ("page", self.page.to_string()),
            ("page_size", self.page_size.to_string()),
        ]
    }
}

/// Pagination block returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
    pub total_items: u64,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_previous: bool,
}

impl Pagination {
    /// Derive the block from totals
    pub fn from_totals(request: PageRequest, total_items: u64) -> Self {
        let size = u64::from(request.page_size.max(1));
        let total_pages = total_items.div_ceil(size) as u32;
        Self {
            page: request.page,
            page_size: request.page_size,
            total_items,
            total_pages,
            has_next: request.page < total_pages,
            has_previous: request.page > 1,
        }
    }
}

/// `{ items, pagination }`
///
/// Some backend resources name the list `data`; both spellings are read,
/// `items` is written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    #[serde(alias = "data")]
    pub items: Vec<T>,
    pub pagination: Pagination,
}
