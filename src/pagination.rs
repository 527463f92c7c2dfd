//! Paging helpers shared by the listing pages.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_ITEMS_PER_PAGE: u32 = 50;
pub const MAX_ITEMS_PER_PAGE: u32 = 100;

/// Page window forwarded to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

impl Pagination {
    /// Offset of the first row, for endpoints paged with `offset`/`limit`.
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.per_page)
    }
}

/// Raw paging parameters taken from the query string.
///
/// Values are kept as strings so that garbage like `?page=abc` falls back to
/// the defaults instead of rejecting the whole request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default)]
    pub per_page: Option<String>,
    #[serde(default, rename = "perPage")]
    pub per_page_camel: Option<String>,
}

impl PageQuery {
    pub fn pagination(&self) -> Pagination {
        let page = self
            .page
            .as_deref()
            .and_then(|value| value.trim().parse::<u32>().ok())
            .filter(|page| *page >= 1)
            .unwrap_or(DEFAULT_PAGE);

        let per_page = self
            .per_page
            .as_deref()
            .or(self.per_page_camel.as_deref())
            .and_then(|value| value.trim().parse::<u32>().ok())
            .filter(|per_page| *per_page >= 1)
            .map(|per_page| per_page.min(MAX_ITEMS_PER_PAGE))
            .unwrap_or(DEFAULT_ITEMS_PER_PAGE);

        Pagination { page, per_page }
    }
}

/// Pagination block echoed back in page documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
    pub total_pages: u64,
}

impl PaginationMeta {
    /// Pagination used when a listing failed to load.
    pub fn zeroed(pagination: Pagination) -> Self {
        Self {
            page: u64::from(pagination.page),
            per_page: u64::from(pagination.per_page),
            total: 0,
            total_pages: 0,
        }
    }

    /// Builds metadata for endpoints that only report a total count.
    pub fn from_total(pagination: Pagination, total: u64) -> Self {
        let per_page = u64::from(pagination.per_page.max(1));
        Self {
            page: u64::from(pagination.page),
            per_page,
            total,
            total_pages: total.div_ceil(per_page),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page: Option<&str>, per_page: Option<&str>, camel: Option<&str>) -> PageQuery {
        PageQuery {
            page: page.map(str::to_string),
            per_page: per_page.map(str::to_string),
            per_page_camel: camel.map(str::to_string),
        }
    }

    #[test]
    fn defaults_when_missing() {
        assert_eq!(
            query(None, None, None).pagination(),
            Pagination {
                page: 1,
                per_page: 50
            }
        );
    }

    #[test]
    fn invalid_values_fall_back() {
        let pagination = query(Some("abc"), Some("0"), None).pagination();
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.per_page, 50);

        let pagination = query(Some("0"), Some("-3"), None).pagination();
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.per_page, 50);
    }

    #[test]
    fn per_page_is_capped_and_camel_case_accepted() {
        assert_eq!(query(None, Some("500"), None).pagination().per_page, 100);
        assert_eq!(query(Some("3"), None, Some("20")).pagination(), Pagination {
            page: 3,
            per_page: 20
        });
    }

    #[test]
    fn offset_and_totals() {
        let pagination = Pagination {
            page: 3,
            per_page: 25,
        };
        assert_eq!(pagination.offset(), 50);

        let meta = PaginationMeta::from_total(pagination, 51);
        assert_eq!(meta.total_pages, 3);

        let zeroed = PaginationMeta::zeroed(pagination);
        assert_eq!((zeroed.total, zeroed.total_pages), (0, 0));
        assert_eq!(zeroed.page, 3);
    }
}
