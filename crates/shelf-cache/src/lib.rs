//! Query caching for ShelfScope.
//!
//! An explicit, in-process cache mapping a query identity (resource +
//! filter key) to its fetch lifecycle: loading, resolved data, or error,
//! with a fetch timestamp. Results from superseded in-flight fetches are
//! rejected by generation ticket, so a category change racing an older
//! fetch can never publish stale data under the new key.
//!
//! # Example
//!
//! ```rust,ignore
//! use shelf_cache::{QueryCache, QueryKey};
//!
//! let mut cache: QueryCache<Vec<Product>> = QueryCache::new();
//! let key = QueryKey::new("products", Some("laptops"));
//!
//! let ticket = cache.begin(&key);
//! match fetch_laptops().await {
//!     Ok(products) => cache.resolve(ticket, products)?,
//!     Err(e) => cache.fail(ticket, e.to_string())?,
//! }
//!
//! if let Some(products) = cache.get(&key) {
//!     // fresh hit
//! }
//! ```

mod error;
mod key;
mod query;

pub use error::CacheError;
pub use key::QueryKey;
pub use query::{FetchTicket, QueryCache, QueryStatus};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{CacheError, FetchTicket, QueryCache, QueryKey, QueryStatus};
}
