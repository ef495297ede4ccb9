//! Pagination and category filtering.
//!
//! The pager is a small state machine driven by explicit events
//! ([`PagerEvent`]) rather than inferred from re-invocation: a category or
//! page-size change resets the page exactly once, and a page request is
//! clamped into valid bounds before it is stored. Deriving the visible
//! slice ([`Pager::view`]) is a pure function of the list and the state.

mod state;
mod view;

pub use state::{PageSize, Pager, PagerEvent, PagerState};
pub use view::{derive_page, PageBounds, PageView};
