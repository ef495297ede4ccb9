//! Pager state machine.

use serde::{Deserialize, Serialize};

use super::view::{derive_page, PageBounds, PageView};

/// Items-per-page setting. A fixed set of options, matching the density
/// selector in the dashboard UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PageSize {
    #[default]
    Ten,
    Twenty,
    Fifty,
    Hundred,
}

impl PageSize {
    /// All selectable page sizes, in display order.
    pub const ALL: [PageSize; 4] = [
        PageSize::Ten,
        PageSize::Twenty,
        PageSize::Fifty,
        PageSize::Hundred,
    ];

    /// Number of items per page.
    pub fn as_usize(&self) -> usize {
        match self {
            PageSize::Ten => 10,
            PageSize::Twenty => 20,
            PageSize::Fifty => 50,
            PageSize::Hundred => 100,
        }
    }

    /// Parse from an item count. Returns `None` for anything outside the
    /// fixed option set.
    pub fn from_value(value: usize) -> Option<Self> {
        match value {
            10 => Some(PageSize::Ten),
            20 => Some(PageSize::Twenty),
            50 => Some(PageSize::Fifty),
            100 => Some(PageSize::Hundred),
            _ => None,
        }
    }
}

/// Pagination and filter state held between recomputations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagerState {
    /// Requested page (1-indexed).
    pub page: usize,
    /// Items per page.
    pub size: PageSize,
    /// Active category filter, or `None` for the full catalog.
    pub category: Option<String>,
}

impl Default for PagerState {
    fn default() -> Self {
        Self {
            page: 1,
            size: PageSize::default(),
            category: None,
        }
    }
}

/// An explicit state transition. Only these events mutate pager state;
/// recomputing a view never does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PagerEvent {
    /// The user picked a category filter (`None` clears it).
    CategorySelected(Option<String>),
    /// The user picked a page size.
    SizeSelected(PageSize),
    /// The user asked for a page (next/prev/jump).
    PageRequested(usize),
}

/// Event-driven pagination controller.
///
/// Transition table:
///
/// | event              | effect                                   |
/// |--------------------|------------------------------------------|
/// | `CategorySelected` | if changed: store category, page = 1     |
/// | `SizeSelected`     | if changed: store size, page = 1         |
/// | `PageRequested(n)` | page = clamp(n, 1, total_pages)          |
///
/// The change guards make the page reset fire exactly once per category or
/// size change. Re-applying the same selection, or deriving a view any
/// number of times, leaves the page untouched.
#[derive(Debug, Clone, Default)]
pub struct Pager {
    state: PagerState,
}

impl Pager {
    /// Create a pager at page 1 with the given page size and no filter.
    pub fn new(size: PageSize) -> Self {
        Self {
            state: PagerState {
                page: 1,
                size,
                category: None,
            },
        }
    }

    /// Current state.
    pub fn state(&self) -> &PagerState {
        &self.state
    }

    /// Active category filter.
    pub fn category(&self) -> Option<&str> {
        self.state.category.as_deref()
    }

    /// Current page size.
    pub fn size(&self) -> PageSize {
        self.state.size
    }

    /// Apply one transition. `total_items` sizes the clamp for page
    /// requests; category and size transitions ignore it.
    pub fn apply(&mut self, event: PagerEvent, total_items: usize) {
        match event {
            PagerEvent::CategorySelected(category) => self.select_category(category.as_deref()),
            PagerEvent::SizeSelected(size) => self.select_size(size),
            PagerEvent::PageRequested(page) => self.request_page(page, total_items),
        }
    }

    /// Switch the category filter, resetting to page 1.
    ///
    /// No-op when the selection equals the current filter, so the reset
    /// fires exactly once per actual change.
    pub fn select_category(&mut self, category: Option<&str>) {
        if self.state.category.as_deref() == category {
            return;
        }
        self.state.category = category.map(String::from);
        self.state.page = 1;
    }

    /// Switch the page size, resetting to page 1. Changing density
    /// invalidates the old page index. No-op when unchanged.
    pub fn select_size(&mut self, size: PageSize) {
        if self.state.size == size {
            return;
        }
        self.state.size = size;
        self.state.page = 1;
    }

    /// Request a page, clamped into `[1, total_pages]` before storing.
    pub fn request_page(&mut self, page: usize, total_items: usize) {
        let bounds = PageBounds::new(page, self.state.size.as_usize(), total_items);
        self.state.page = bounds.page;
    }

    /// Derive the visible page of `items` for the current state. Pure;
    /// never mutates the pager.
    pub fn view<'a, T>(&self, items: &'a [T]) -> PageView<'a, T> {
        derive_page(items, &self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_size_round_trip() {
        for size in PageSize::ALL {
            assert_eq!(PageSize::from_value(size.as_usize()), Some(size));
        }
        assert_eq!(PageSize::from_value(25), None);
        assert_eq!(PageSize::from_value(0), None);
    }

    #[test]
    fn test_category_change_resets_page_once() {
        let items: Vec<u32> = (0..100).collect();
        let mut pager = Pager::new(PageSize::Ten);

        pager.request_page(4, items.len());
        assert_eq!(pager.state().page, 4);

        pager.apply(
            PagerEvent::CategorySelected(Some("laptops".to_string())),
            items.len(),
        );
        assert_eq!(pager.state().page, 1);
        assert_eq!(pager.category(), Some("laptops"));

        // Deriving views does not mutate state.
        let _ = pager.view(&items);
        let _ = pager.view(&items);
        assert_eq!(pager.state().page, 1);

        // Navigate away, then re-apply the same category: no second reset.
        pager.request_page(3, items.len());
        pager.apply(
            PagerEvent::CategorySelected(Some("laptops".to_string())),
            items.len(),
        );
        assert_eq!(pager.state().page, 3);
    }

    #[test]
    fn test_clearing_category_also_resets() {
        let mut pager = Pager::new(PageSize::Ten);
        pager.select_category(Some("phones"));
        pager.request_page(2, 100);

        pager.select_category(None);
        assert_eq!(pager.state().page, 1);
        assert_eq!(pager.category(), None);
    }

    #[test]
    fn test_size_change_resets_page() {
        let mut pager = Pager::new(PageSize::Ten);
        pager.request_page(5, 100);

        pager.select_size(PageSize::Fifty);
        assert_eq!(pager.state().page, 1);
        assert_eq!(pager.size(), PageSize::Fifty);

        // Same size again: no reset.
        pager.request_page(2, 100);
        pager.select_size(PageSize::Fifty);
        assert_eq!(pager.state().page, 2);
    }

    #[test]
    fn test_page_request_clamps() {
        let mut pager = Pager::new(PageSize::Ten);

        pager.request_page(9999, 25);
        assert_eq!(pager.state().page, 3);

        pager.request_page(0, 25);
        assert_eq!(pager.state().page, 1);
    }

    #[test]
    fn test_view_matches_state() {
        let items: Vec<u32> = (0..25).collect();
        let mut pager = Pager::new(PageSize::Ten);
        pager.request_page(3, items.len());

        let view = pager.view(&items);
        assert_eq!(view.bounds.page, 3);
        assert_eq!(view.visible, &[20, 21, 22, 23, 24]);
    }
}
