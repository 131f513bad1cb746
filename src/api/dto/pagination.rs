//! Pagination and filtering query parameters, and the page envelope.

use serde::{Deserialize, Serialize};
use serde_with::{NoneAsEmptyString, serde_as};

use crate::domain::pagination::PageRequest;

/// Page size bounds applied to search requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    pub default_size: u32,
    pub max_size: u32,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            default_size: 20,
            max_size: 2000,
        }
    }
}

/// Query parameters for `GET /api/books`.
///
/// Empty values (`?title=&page=`) are treated as absent. `page` and `size`
/// are kept as raw strings and parsed by [`Self::page_request`], so a
/// non-numeric value falls back to its default instead of failing the search.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct BookSearchParams {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub title: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub author: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub page: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub size: Option<String>,
}

fn parse_number(value: Option<&str>) -> Option<i64> {
    value.and_then(|v| v.trim().parse().ok())
}

impl BookSearchParams {
    /// Resolves the requested page against `limits`.
    ///
    /// # Defaults
    ///
    /// - `page`: 0, also for negative or non-numeric values
    /// - `size`: `limits.default_size` when absent or non-numeric, otherwise
    ///   clamped to `1..=limits.max_size`
    pub fn page_request(&self, limits: PageLimits) -> PageRequest {
        let page = parse_number(self.page.as_deref())
            .unwrap_or(0)
            .clamp(0, u32::MAX as i64) as u32;
        let size = match parse_number(self.size.as_deref()) {
            Some(size) => size.clamp(1, limits.max_size.max(1) as i64) as u32,
            None => limits.default_size,
        };

        PageRequest::new(page, size)
    }
}

/// Page envelope returned by search endpoints.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub content: Vec<T>,
    pub pageable: PageableInfo,
    pub total_elements: i64,
    pub total_pages: i64,
    pub number_of_elements: usize,
    pub number: u32,
    pub size: u32,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
}

/// Position of the returned page.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageableInfo {
    pub page_number: u32,
    pub page_size: u32,
    pub offset: i64,
}
