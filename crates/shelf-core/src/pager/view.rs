//! Page bounds and the derived visible slice.

use serde::{Deserialize, Serialize};

use super::state::{PageSize, PagerState};

/// Navigation bounds for one page of a list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageBounds {
    /// Effective page (1-indexed, already clamped into valid bounds).
    pub page: usize,
    /// Items per page.
    pub per_page: usize,
    /// Total number of items.
    pub total: usize,
    /// Total number of pages (at least 1, even for an empty list).
    pub total_pages: usize,
    /// Whether there's a next page.
    pub has_next: bool,
    /// Whether there's a previous page.
    pub has_prev: bool,
}

impl PageBounds {
    /// Create page bounds, clamping the requested page into
    /// `[1, total_pages]`.
    ///
    /// An empty list still reports one page so the display never shows
    /// "page 1 of 0". Clamping is idempotent: feeding the effective page
    /// back in yields the same bounds. `per_page` is floored at 1.
    pub fn new(requested_page: usize, per_page: usize, total: usize) -> Self {
        let per_page = per_page.max(1);
        let total_pages = if total == 0 {
            1
        } else {
            (total + per_page - 1) / per_page
        };
        let page = requested_page.clamp(1, total_pages);

        Self {
            page,
            per_page,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    /// Index of the first item on this page.
    pub fn offset(&self) -> usize {
        (self.page - 1) * self.per_page
    }

    /// Check if on the first page.
    pub fn is_first(&self) -> bool {
        self.page == 1
    }

    /// Check if on the last page.
    pub fn is_last(&self) -> bool {
        self.page >= self.total_pages
    }

    /// First item number on this page (1-indexed, for display; 0 when the
    /// list is empty).
    pub fn start_item(&self) -> usize {
        if self.total == 0 {
            0
        } else {
            (self.page - 1) * self.per_page + 1
        }
    }

    /// Last item number on this page (1-indexed, for display).
    pub fn end_item(&self) -> usize {
        (self.page * self.per_page).min(self.total)
    }

    /// Page numbers to display, windowed around the current page
    /// (e.g., `[3, 4, 5, 6, 7]` for page 5 of 10 with 5 visible).
    pub fn page_numbers(&self, max_visible: usize) -> Vec<usize> {
        if self.total_pages <= max_visible {
            return (1..=self.total_pages).collect();
        }

        let half = max_visible / 2;
        let start = self.page.saturating_sub(half).max(1);
        let end = (start + max_visible - 1).min(self.total_pages);
        let start = (end + 1).saturating_sub(max_visible).max(1);

        (start..=end).collect()
    }
}

impl Default for PageBounds {
    fn default() -> Self {
        Self::new(1, PageSize::default().as_usize(), 0)
    }
}

/// One page of a list: the visible slice plus its navigation bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageView<'a, T> {
    /// The items on the effective page.
    pub visible: &'a [T],
    /// Navigation bounds (effective page, total pages, ...).
    pub bounds: PageBounds,
}

impl<'a, T> PageView<'a, T> {
    /// Check if this page has no items.
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Number of items on this page.
    pub fn len(&self) -> usize {
        self.visible.len()
    }
}

/// Derive the visible page of `items` for a pager state.
///
/// Works on any item type; the pager depends only on the list shape.
/// Out-of-range pages clamp and out-of-range slice ends truncate, so this
/// never panics.
pub fn derive_page<'a, T>(items: &'a [T], state: &PagerState) -> PageView<'a, T> {
    let bounds = PageBounds::new(state.page, state.size.as_usize(), items.len());

    let start = bounds.offset().min(items.len());
    let end = (start + bounds.per_page).min(items.len());

    PageView {
        visible: &items[start..end],
        bounds,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(page: usize, size: PageSize) -> PagerState {
        PagerState {
            page,
            size,
            category: None,
        }
    }

    #[test]
    fn test_bounds_basics() {
        let b = PageBounds::new(2, 10, 45);
        assert_eq!(b.total_pages, 5);
        assert!(b.has_next);
        assert!(b.has_prev);
        assert_eq!(b.offset(), 10);
    }

    #[test]
    fn test_bounds_first_and_last_page() {
        let first = PageBounds::new(1, 10, 45);
        assert!(first.is_first());
        assert!(!first.has_prev);
        assert!(first.has_next);

        let last = PageBounds::new(5, 10, 45);
        assert!(last.is_last());
        assert!(last.has_prev);
        assert!(!last.has_next);
    }

    #[test]
    fn test_bounds_empty_list_is_one_page() {
        let b = PageBounds::new(1, 10, 0);
        assert_eq!(b.total_pages, 1);
        assert!(!b.has_next);
        assert!(!b.has_prev);
        assert_eq!(b.start_item(), 0);
        assert_eq!(b.end_item(), 0);
    }

    #[test]
    fn test_bounds_clamp_is_idempotent() {
        let once = PageBounds::new(9999, 10, 45);
        assert_eq!(once.page, 5);
        let twice = PageBounds::new(once.page, 10, 45);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_bounds_per_page_zero_is_floored() {
        let b = PageBounds::new(1, 0, 5);
        assert_eq!(b.per_page, 1);
        assert_eq!(b.total_pages, 5);
    }

    #[test]
    fn test_bounds_page_zero_clamps_to_one() {
        let b = PageBounds::new(0, 10, 45);
        assert_eq!(b.page, 1);
    }

    #[test]
    fn test_item_range() {
        let b = PageBounds::new(2, 10, 45);
        assert_eq!(b.start_item(), 11);
        assert_eq!(b.end_item(), 20);
    }

    #[test]
    fn test_page_numbers_window() {
        let b = PageBounds::new(5, 10, 100);
        assert_eq!(b.page_numbers(5), vec![3, 4, 5, 6, 7]);

        let few = PageBounds::new(1, 10, 30);
        assert_eq!(few.page_numbers(5), vec![1, 2, 3]);
    }

    #[test]
    fn test_derive_last_partial_page() {
        let items: Vec<u32> = (0..25).collect();
        let view = derive_page(&items, &state(3, PageSize::Ten));

        assert_eq!(view.len(), 5);
        assert_eq!(view.visible[0], 20);
        assert_eq!(view.visible[4], 24);
        assert_eq!(view.bounds.total_pages, 3);
    }

    #[test]
    fn test_derive_far_out_of_range_clamps() {
        let items: Vec<u32> = (0..25).collect();
        let view = derive_page(&items, &state(9999, PageSize::Ten));

        assert_eq!(view.bounds.page, 3);
        assert_eq!(view.len(), 5);
    }

    #[test]
    fn test_derive_empty_list() {
        let items: Vec<u32> = Vec::new();
        let view = derive_page(&items, &state(1, PageSize::Ten));

        assert!(view.is_empty());
        assert_eq!(view.bounds.total_pages, 1);
    }
}
