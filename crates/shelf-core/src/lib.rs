//! Catalog domain logic for ShelfScope.
//!
//! This crate provides the pure, synchronous core of the dashboard:
//!
//! - **Product**: the catalog item entity, wire-compatible with the
//!   upstream catalog API
//! - **Metrics**: derived aggregates over a product list (average price,
//!   low-stock/high-rated shortlist, top categories)
//! - **Pager**: event-driven pagination and category filtering over an
//!   in-memory product list
//!
//! Everything here is a pure function of its inputs: no I/O, no shared
//! state, safe to recompute on every state change.
//!
//! # Example
//!
//! ```rust,ignore
//! use shelf_core::prelude::*;
//!
//! let metrics = compute_metrics(&products);
//! println!("avg ${:.2} across {}", metrics.average_price, metrics.total_products);
//!
//! let mut pager = Pager::new(PageSize::Ten);
//! pager.apply(PagerEvent::CategorySelected(Some("laptops".into())), products.len());
//! let view = pager.view(&products);
//! for product in view.visible {
//!     println!("{} — ${}", product.title, product.price);
//! }
//! ```

pub mod metrics;
pub mod pager;
pub mod product;

pub use metrics::{compute_metrics, CategoryInfo, ProductMetrics};
pub use pager::{PageBounds, PageSize, PageView, Pager, PagerEvent, PagerState};
pub use product::Product;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::metrics::{compute_metrics, CategoryInfo, ProductMetrics};
    pub use crate::pager::{PageBounds, PageSize, PageView, Pager, PagerEvent, PagerState};
    pub use crate::product::Product;
}
