//! Catalog API response shapes.

use serde::{Deserialize, Serialize};
use shelf_core::Product;

/// Product list response from the catalog API.
///
/// The full catalog is returned in one payload (`limit: 0` upstream), so
/// `products.len()` and `total` agree and no server-side pagination needs
/// reconciling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductsResponse {
    pub products: Vec<Product>,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub skip: u32,
    #[serde(default)]
    pub limit: u32,
}

/// One entry from the categories endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryEntry {
    /// Slug used as the filter key (e.g. "mens-watches").
    pub slug: String,
    /// Human-readable name (e.g. "Mens Watches").
    pub name: String,
    /// Upstream URL for the category's products.
    #[serde(default)]
    pub url: String,
}
