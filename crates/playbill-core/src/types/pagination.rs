//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

/// Default page size.
pub const DEFAULT_PAGE_SIZE: u64 = 10;
/// Maximum page size.
pub const MAX_PAGE_SIZE: u64 = 100;

/// Request parameters for paginated queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub page_size: u64,
}

impl PageRequest {
    /// Create a new page request. The page size is clamped to
    /// `1..=MAX_PAGE_SIZE`, which also keeps the store's signed limit
    /// representable; the page floor guards against a zero page.
    pub fn new(page: u64, page_size: u64) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// Number of documents to skip. Saturates for out-of-range page
    /// numbers instead of overflowing; such a skip simply yields an
    /// empty page.
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.page_size)
    }

    /// Maximum number of documents to return.
    pub fn limit(&self) -> u64 {
        self.page_size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Navigation metadata returned alongside every paginated list.
///
/// Absent pages serialize as explicit `null`s, matching the wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// The page this response covers (1-based).
    pub current_page: u64,
    /// Previous page, absent on the first page.
    pub prev_page: Option<u64>,
    /// Next page, derived from the full-page heuristic: a full page is
    /// assumed to mean more data exists. When the total count is an
    /// exact multiple of the page size the final page still reports a
    /// next page; see the tests.
    pub next_page: Option<u64>,
    /// First page, absent when there are no matching entities.
    pub first_page: Option<u64>,
    /// Last page (`ceil(total / page_size)`), absent when there are no
    /// matching entities.
    pub last_page: Option<u64>,
}

impl PageMeta {
    /// Compute navigation metadata for one page of results.
    ///
    /// `returned` is the number of items actually on this page and
    /// `total_count` the count of all entities matching the same filter.
    pub fn new(request: PageRequest, returned: usize, total_count: u64) -> Self {
        let page = request.page;
        let total_pages = total_count.div_ceil(request.page_size);

        let prev_page = if page > 1 { Some(page - 1) } else { None };
        let next_page = if returned as u64 == request.page_size {
            Some(page + 1)
        } else {
            None
        };
        let first_page = if total_pages > 0 { Some(1) } else { None };
        let last_page = if total_pages >= 1 {
            Some(total_pages)
        } else {
            first_page
        };

        Self {
            current_page: page,
            prev_page,
            next_page,
            first_page,
            last_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(page: u64, page_size: u64, returned: usize, total: u64) -> PageMeta {
        PageMeta::new(PageRequest::new(page, page_size), returned, total)
    }

    #[test]
    fn offset_and_limit() {
        let req = PageRequest::new(1, 10);
        assert_eq!(req.offset(), 0);
        assert_eq!(req.limit(), 10);

        let req = PageRequest::new(3, 10);
        assert_eq!(req.offset(), 20);
    }

    #[test]
    fn huge_page_saturates_offset_instead_of_overflowing() {
        let req = PageRequest::new(u64::MAX, 10);
        assert_eq!(req.offset(), u64::MAX);

        let req = PageRequest::new(u64::MAX / 2, u64::MAX);
        assert_eq!(req.offset(), u64::MAX);
    }

    #[test]
    fn page_size_is_clamped_to_the_maximum() {
        let req = PageRequest::new(1, u64::MAX);
        assert_eq!(req.page_size, MAX_PAGE_SIZE);
        assert!(i64::try_from(req.limit()).is_ok());
    }

    #[test]
    fn prev_page_absent_only_on_first_page() {
        assert_eq!(meta(1, 10, 10, 50).prev_page, None);
        assert_eq!(meta(2, 10, 10, 50).prev_page, Some(1));
        assert_eq!(meta(7, 10, 3, 63).prev_page, Some(6));
    }

    #[test]
    fn last_page_is_ceil_of_total() {
        assert_eq!(meta(1, 10, 10, 15).last_page, Some(2));
        assert_eq!(meta(1, 10, 10, 20).last_page, Some(2));
        assert_eq!(meta(1, 10, 10, 21).last_page, Some(3));
        assert_eq!(meta(1, 10, 1, 1).last_page, Some(1));
    }

    #[test]
    fn empty_result_set_has_no_first_or_last_page() {
        let m = meta(1, 10, 0, 0);
        assert_eq!(m.first_page, None);
        assert_eq!(m.last_page, None);
        assert_eq!(m.next_page, None);
        assert_eq!(m.prev_page, None);
    }

    #[test]
    fn fifteen_movies_page_two() {
        // GET /api/movie?page=2 with pageSize 10 and 15 total movies:
        // 5 returned, prev_page=1, next_page absent, last_page=2.
        let m = meta(2, 10, 5, 15);
        assert_eq!(m.current_page, 2);
        assert_eq!(m.prev_page, Some(1));
        assert_eq!(m.next_page, None);
        assert_eq!(m.first_page, Some(1));
        assert_eq!(m.last_page, Some(2));
    }

    #[test]
    fn full_page_heuristic_sets_next_page() {
        assert_eq!(meta(1, 10, 10, 50).next_page, Some(2));
        assert_eq!(meta(1, 10, 9, 9).next_page, None);
    }

    #[test]
    fn exact_multiple_of_page_size_misreports_next_page() {
        // 20 total with page size 10: page 2 is the final page, but it
        // comes back full so the heuristic still reports a next page.
        let m = meta(2, 10, 10, 20);
        assert_eq!(m.next_page, Some(3));
        assert_eq!(m.last_page, Some(2));
    }

    #[test]
    fn null_pages_serialize_as_explicit_nulls() {
        let m = meta(1, 10, 5, 5);
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["current_page"], 1);
        assert_eq!(json["prev_page"], serde_json::Value::Null);
        assert_eq!(json["next_page"], serde_json::Value::Null);
        assert_eq!(json["last_page"], 1);
    }
}
