//! Pagination value objects.
//!
//! Both the group picker and the moderation queue page through storage with
//! the same fixed page size, so the arithmetic lives here once.

use serde::{Deserialize, Serialize};

/// Fixed page size for every paginated listing.
pub const PAGE_SIZE: u32 = 8;

/// One page of results together with the total count behind it.
///
/// # Invariants
///
/// - `page` is 0-based
/// - `items.len() <= PAGE_SIZE as usize`
/// - `max_page()` is `max(0, ceil(total / PAGE_SIZE) - 1)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub total: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, page: u32, total: u64) -> Self {
        Self { items, page, total }
    }

    /// Highest valid page index for this listing, clamped to >= 0.
    ///
    /// An empty listing still has a page 0 so the picker can render its
    /// navigation row.
    pub fn max_page(&self) -> u32 {
        max_page(self.total)
    }

    /// True when a previous page exists.
    pub fn has_prev(&self) -> bool {
        self.page > 0
    }

    /// True when a following page exists.
    pub fn has_next(&self) -> bool {
        self.page < self.max_page()
    }
}

/// Highest valid 0-based page index for `total` items.
pub fn max_page(total: u64) -> u32 {
    if total == 0 {
        return 0;
    }
    (total.div_ceil(PAGE_SIZE as u64) - 1) as u32
}

/// Row offset of the first item on `page`.
pub fn page_offset(page: u32) -> u64 {
    page as u64 * PAGE_SIZE as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn max_page_is_zero_for_empty_listing() {
        assert_eq!(max_page(0), 0);
    }

    #[test]
    fn max_page_is_zero_for_exactly_one_page() {
        assert_eq!(max_page(PAGE_SIZE as u64), 0);
    }

    #[test]
    fn max_page_rounds_up_partial_pages() {
        assert_eq!(max_page(PAGE_SIZE as u64 + 1), 1);
        assert_eq!(max_page(17), 2);
    }

    #[test]
    fn nav_flags_reflect_position() {
        let first: Page<u32> = Page::new(vec![], 0, 20);
        assert!(!first.has_prev());
        assert!(first.has_next());

        let last: Page<u32> = Page::new(vec![], 2, 20);
        assert!(last.has_prev());
        assert!(!last.has_next());
    }

    proptest! {
        #[test]
        fn max_page_matches_ceiling_formula(total in 0u64..100_000) {
            let expected = ((total as f64 / PAGE_SIZE as f64).ceil() as i64 - 1).max(0) as u32;
            prop_assert_eq!(max_page(total), expected);
        }

        #[test]
        fn offsets_of_distinct_pages_never_overlap(a in 0u32..10_000, b in 0u32..10_000) {
            prop_assume!(a != b);
            let (lo, hi) = if a < b { (a, b) } else { (b, a) };
            // Ranges [offset, offset + PAGE_SIZE) are disjoint per page.
            prop_assert!(page_offset(lo) + PAGE_SIZE as u64 <= page_offset(hi));
        }
    }
}
