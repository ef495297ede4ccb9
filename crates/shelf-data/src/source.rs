//! The trait seam between the core's consumers and the network.

use async_trait::async_trait;
use shelf_core::Product;

use crate::{CategoryEntry, FetchError, ProductsResponse};

/// A source of catalog data.
///
/// [`CatalogClient`](crate::CatalogClient) is the real implementation;
/// tests substitute an in-memory fake so paging and metrics flows run
/// without a network.
#[async_trait]
pub trait ProductSource {
    /// Fetch the full product list, optionally filtered by category slug.
    async fn products(&self, category: Option<&str>) -> Result<ProductsResponse, FetchError>;

    /// Fetch a single product by id.
    async fn product(&self, id: u64) -> Result<Product, FetchError>;

    /// Fetch the list of catalog categories.
    async fn categories(&self) -> Result<Vec<CategoryEntry>, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// In-memory source backed by a fixed product list.
    struct StaticSource {
        products: Vec<Product>,
    }

    #[async_trait]
    impl ProductSource for StaticSource {
        async fn products(&self, category: Option<&str>) -> Result<ProductsResponse, FetchError> {
            let products: Vec<Product> = match category {
                Some(cat) => self
                    .products
                    .iter()
                    .filter(|p| p.category == cat)
                    .cloned()
                    .collect(),
                None => self.products.clone(),
            };
            let total = products.len() as u32;
            Ok(ProductsResponse {
                products,
                total,
                skip: 0,
                limit: 0,
            })
        }

        async fn product(&self, id: u64) -> Result<Product, FetchError> {
            self.products
                .iter()
                .find(|p| p.id == id)
                .cloned()
                .ok_or_else(|| FetchError::Http {
                    status: 404,
                    url: format!("/products/{}", id),
                })
        }

        async fn categories(&self) -> Result<Vec<CategoryEntry>, FetchError> {
            Ok(Vec::new())
        }
    }

    fn fixture() -> StaticSource {
        StaticSource {
            products: vec![
                Product {
                    id: 1,
                    category: "laptops".to_string(),
                    ..Default::default()
                },
                Product {
                    id: 2,
                    category: "phones".to_string(),
                    ..Default::default()
                },
                Product {
                    id: 3,
                    category: "laptops".to_string(),
                    ..Default::default()
                },
            ],
        }
    }

    #[tokio::test]
    async fn test_fake_source_filters_by_category() {
        let source = fixture();

        let all = source.products(None).await.unwrap();
        assert_eq!(all.total, 3);

        let laptops = source.products(Some("laptops")).await.unwrap();
        assert_eq!(laptops.total, 2);
        assert!(laptops.products.iter().all(|p| p.category == "laptops"));
    }

    #[tokio::test]
    async fn test_fake_source_missing_product_is_distinguishable() {
        let source = fixture();
        let err = source.product(99).await.unwrap_err();
        assert!(matches!(err, FetchError::Http { status: 404, .. }));
    }
}
