//! Catalog API client.

use std::time::Instant;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use shelf_core::Product;
use tracing::{debug, info, warn};

use crate::{CategoryEntry, FetchError, ProductSource, ProductsResponse};

/// Default upstream catalog service.
pub const DEFAULT_BASE_URL: &str = "https://dummyjson.com";

/// HTTP client for a dummyjson-shaped catalog API.
///
/// Product list calls pass `limit=0` so the upstream returns the whole
/// catalog in one response; all paging happens client-side.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    base_url: String,
    http: reqwest::Client,
}

impl CatalogClient {
    /// Create a client against the default catalog service.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against a custom base URL (no trailing slash).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn products_url(&self, category: Option<&str>) -> String {
        match category {
            Some(cat) => format!(
                "{}/products/category/{}?limit=0",
                self.base_url,
                urlencoding::encode(cat)
            ),
            None => format!("{}/products?limit=0", self.base_url),
        }
    }

    fn product_url(&self, id: u64) -> String {
        format!("{}/products/{}", self.base_url, id)
    }

    fn categories_url(&self) -> String {
        format!("{}/products/categories", self.base_url)
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let start = Instant::now();
        debug!(target: "shelf_data", url, "fetching");

        let resp = self.http.get(url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            warn!(
                target: "shelf_data",
                url,
                status = status.as_u16(),
                elapsed_ms = start.elapsed().as_millis() as u64,
                "upstream returned error status"
            );
            return Err(FetchError::Http {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let bytes = resp.bytes().await?;
        let value: T = serde_json::from_slice(&bytes)
            .map_err(|e| FetchError::Deserialization(e.to_string()))?;

        info!(
            target: "shelf_data",
            url,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "fetch ok"
        );
        Ok(value)
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductSource for CatalogClient {
    async fn products(&self, category: Option<&str>) -> Result<ProductsResponse, FetchError> {
        self.fetch_json(&self.products_url(category)).await
    }

    async fn product(&self, id: u64) -> Result<Product, FetchError> {
        self.fetch_json(&self.product_url(id)).await
    }

    async fn categories(&self) -> Result<Vec<CategoryEntry>, FetchError> {
        self.fetch_json(&self.categories_url()).await
    }
}
