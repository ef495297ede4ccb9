//! Product entity.

use serde::{Deserialize, Serialize};

/// Stock level below which a product counts as running low.
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// Minimum rating for a product to count as highly rated.
pub const HIGH_RATING_THRESHOLD: f64 = 4.5;

/// A catalog item as delivered by the upstream catalog API.
///
/// Field names follow the upstream wire format (camelCase for
/// `discountPercentage`). Every field carries `#[serde(default)]` so a
/// malformed entry coerces to zero/empty instead of rejecting the whole
/// list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Product {
    /// Unique identifier, externally assigned.
    #[serde(default)]
    pub id: u64,
    /// Product title.
    #[serde(default)]
    pub title: String,
    /// Full description.
    #[serde(default)]
    pub description: String,
    /// Unit price (non-negative).
    #[serde(default)]
    pub price: f64,
    /// Discount percentage, 0–100.
    #[serde(default, rename = "discountPercentage")]
    pub discount_percentage: f64,
    /// Customer rating, 0.0–5.0.
    #[serde(default)]
    pub rating: f64,
    /// Units remaining.
    #[serde(default)]
    pub stock: u32,
    /// Brand name (may be empty).
    #[serde(default)]
    pub brand: String,
    /// Category slug (non-empty in valid data).
    #[serde(default)]
    pub category: String,
    /// Thumbnail image URL.
    #[serde(default)]
    pub thumbnail: String,
}

impl Product {
    /// Check if stock is below the low-stock threshold.
    pub fn is_low_stock(&self) -> bool {
        self.stock < LOW_STOCK_THRESHOLD
    }

    /// Check if the rating meets the high-rating threshold.
    pub fn is_highly_rated(&self) -> bool {
        self.rating >= HIGH_RATING_THRESHOLD
    }

    /// Price after applying the discount percentage.
    pub fn discounted_price(&self) -> f64 {
        self.price * (1.0 - self.discount_percentage / 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_upstream_shape() {
        let json = r#"{
            "id": 1,
            "title": "iPhone 9",
            "description": "An apple mobile which is nothing like apple",
            "price": 549.0,
            "discountPercentage": 12.96,
            "rating": 4.69,
            "stock": 94,
            "brand": "Apple",
            "category": "smartphones",
            "thumbnail": "https://cdn.dummyjson.com/product-images/1/thumbnail.jpg"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, 1);
        assert_eq!(product.category, "smartphones");
        assert!((product.discount_percentage - 12.96).abs() < f64::EPSILON);
        assert!(product.is_highly_rated());
        assert!(!product.is_low_stock());
    }

    #[test]
    fn test_missing_fields_coerce_to_defaults() {
        let json = r#"{"id": 7, "title": "Bare", "category": "misc"}"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.price, 0.0);
        assert_eq!(product.stock, 0);
        assert!(product.brand.is_empty());
        assert!(product.is_low_stock());
        assert!(!product.is_highly_rated());
    }

    #[test]
    fn test_discounted_price() {
        let product = Product {
            price: 100.0,
            discount_percentage: 25.0,
            ..Default::default()
        };
        assert!((product.discounted_price() - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_rating_threshold_inclusive() {
        let product = Product {
            rating: 4.5,
            ..Default::default()
        };
        assert!(product.is_highly_rated());
    }
}
