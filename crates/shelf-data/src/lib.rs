//! Catalog data access for ShelfScope.
//!
//! This crate is the fetch collaborator the core computes from:
//!
//! - `ProductsResponse` / `CategoryEntry` - the upstream wire shapes
//! - `ProductSource` - the trait seam consumers program against
//! - `CatalogClient` - reqwest implementation against a dummyjson-shaped
//!   catalog API
//!
//! Fetch failures surface as a distinguishable [`FetchError`], never as a
//! partial list; downstream code either gets a complete (possibly empty)
//! product sequence or no data at all.

mod client;
mod error;
mod models;
mod source;

pub use client::{CatalogClient, DEFAULT_BASE_URL};
pub use error::FetchError;
pub use models::{CategoryEntry, ProductsResponse};
pub use source::ProductSource;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{CatalogClient, CategoryEntry, FetchError, ProductSource, ProductsResponse};
}
