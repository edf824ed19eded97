use std::ops::Range;

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Requested page, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub page_size: usize,
}

impl PageRequest {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self { page, page_size }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_PAGE_SIZE)
    }
}

/// Raw paging query parameters, e.g. `?page=2&page_size=20`.
///
/// Values stay strings so that garbage input degrades to the defaults
/// instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
    pub page_size: Option<String>,
}

impl From<PageQuery> for PageRequest {
    fn from(query: PageQuery) -> Self {
        fn parse(raw: Option<&str>) -> Option<usize> {
            raw.and_then(|value| value.trim().parse().ok())
        }

        Self {
            page: parse(query.page.as_deref()).unwrap_or(DEFAULT_PAGE),
            page_size: parse(query.page_size.as_deref()).unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }
}

/// Paging metadata as rendered under `data.pagination`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub current_page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_previous: bool,
}

/// Paginated payload: `{ "items": [...], "pagination": {...} }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

/// Ceiling-division paging over a known item count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    total_items: usize,
    page_size: usize,
}

impl Paginator {
    /// A page size of zero is treated as one.
    pub fn new(total_items: usize, page_size: usize) -> Self {
        Self {
            total_items,
            page_size: page_size.max(1),
        }
    }

    /// Always at least one page, even for an empty collection.
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.page_size).max(1)
    }

    /// Resolve a requested page number, clamping out-of-range requests to
    /// the nearest valid page.
    pub fn page(&self, requested: usize) -> PageWindow {
        let total_pages = self.total_pages();
        let number = requested.clamp(1, total_pages);
        let start = ((number - 1) * self.page_size).min(self.total_items);
        let end = (start + self.page_size).min(self.total_items);

        PageWindow {
            pagination: Pagination {
                current_page: number,
                page_size: self.page_size,
                total_items: self.total_items,
                total_pages,
                has_next: number < total_pages,
                has_previous: number > 1,
            },
            range: start..end,
        }
    }
}

/// A resolved page: its metadata plus the slice bounds of its items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    pub pagination: Pagination,
    range: Range<usize>,
}

impl PageWindow {
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn middle_page_of_twenty_five() {
        let window = Paginator::new(25, 10).page(2);

        assert_eq!(
            window.pagination,
            Pagination {
                current_page: 2,
                page_size: 10,
                total_items: 25,
                total_pages: 3,
                has_next: true,
                has_previous: true,
            }
        );
        assert_eq!(window.range(), 10..20);
    }

    #[test]
    fn last_page_is_partial() {
        let window = Paginator::new(25, 10).page(3);

        assert_eq!(window.range(), 20..25);
        assert!(!window.pagination.has_next);
        assert!(window.pagination.has_previous);
    }

    #[rstest]
    #[case::zero(0, 1)]
    #[case::first(1, 1)]
    #[case::past_the_end(4, 3)]
    #[case::far_past_the_end(usize::MAX, 3)]
    fn out_of_range_pages_clamp(#[case] requested: usize, #[case] expected: usize) {
        let window = Paginator::new(25, 10).page(requested);

        assert_eq!(window.pagination.current_page, expected);
    }

    #[test]
    fn empty_collection_has_one_empty_page() {
        let window = Paginator::new(0, 10).page(5);

        assert_eq!(window.pagination.current_page, 1);
        assert_eq!(window.pagination.total_pages, 1);
        assert!(window.range().is_empty());
        assert!(!window.pagination.has_next);
        assert!(!window.pagination.has_previous);
    }

    #[test]
    fn zero_page_size_is_treated_as_one() {
        let paginator = Paginator::new(3, 0);

        assert_eq!(paginator.page(1).pagination.page_size, 1);
        assert_eq!(paginator.total_pages(), 3);
    }

    #[rstest]
    #[case(Some("3"), Some("20"), PageRequest::new(3, 20))]
    #[case(None, None, PageRequest::default())]
    #[case(Some("abc"), Some(" 5 "), PageRequest::new(1, 5))]
    #[case(Some("-2"), Some("x"), PageRequest::new(1, 10))]
    fn page_query_parses_leniently(
        #[case] page: Option<&str>,
        #[case] page_size: Option<&str>,
        #[case] expected: PageRequest,
    ) {
        let query = PageQuery {
            page: page.map(str::to_string),
            page_size: page_size.map(str::to_string),
        };

        assert_eq!(PageRequest::from(query), expected);
    }
}
