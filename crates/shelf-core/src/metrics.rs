//! Derived metrics over a product list.

use serde::{Deserialize, Serialize};

use crate::product::{Product, HIGH_RATING_THRESHOLD};

/// Maximum length of the ranked shortlists.
const SHORTLIST_LEN: usize = 3;

/// A category paired with how many products it holds in the current list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInfo {
    /// Category identifier.
    pub name: String,
    /// Number of products in this category (at least 1).
    pub count: usize,
}

/// Aggregate metrics derived from a product list.
///
/// Recomputed in full on every input change; never mutated in place, so a
/// stale list can never leak into a fresh computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ProductMetrics {
    /// Arithmetic mean of `price` over all products. Unrounded;
    /// display-time rounding is a presentation concern.
    pub average_price: f64,
    /// Up to 3 products with rating >= 4.5, fewest units in stock first.
    pub top_low_stock_high_rated: Vec<Product>,
    /// Up to 3 categories ranked by product count, descending.
    pub top_categories: Vec<CategoryInfo>,
    /// Total number of products in the input.
    pub total_products: usize,
}

/// Compute metrics for a product list.
///
/// An empty input yields the defined zero value (average 0.0, empty
/// shortlists) rather than an error.
///
/// Both rankings use stable sorts: products tied on stock keep their
/// original relative order, and categories tied on count keep
/// first-encountered order. Rerunning on an unchanged list is
/// bit-identical.
pub fn compute_metrics(products: &[Product]) -> ProductMetrics {
    if products.is_empty() {
        return ProductMetrics::default();
    }

    let total_price: f64 = products.iter().map(|p| p.price).sum();
    let average_price = total_price / products.len() as f64;

    let mut shortlist: Vec<Product> = products
        .iter()
        .filter(|p| p.rating >= HIGH_RATING_THRESHOLD)
        .cloned()
        .collect();
    shortlist.sort_by_key(|p| p.stock);
    shortlist.truncate(SHORTLIST_LEN);

    let mut top_categories = count_categories(products);
    top_categories.sort_by(|a, b| b.count.cmp(&a.count));
    top_categories.truncate(SHORTLIST_LEN);

    ProductMetrics {
        average_price,
        top_low_stock_high_rated: shortlist,
        top_categories,
        total_products: products.len(),
    }
}

/// Group products by exact category string, preserving first-seen order.
///
/// A HashMap would be the obvious grouping structure, but its iteration
/// order varies run to run and the tie-break contract requires
/// first-encountered order. The list of distinct categories is small, so
/// a linear scan over a Vec is fine.
fn count_categories(products: &[Product]) -> Vec<CategoryInfo> {
    let mut counts: Vec<CategoryInfo> = Vec::new();

    for product in products {
        match counts.iter_mut().find(|c| c.name == product.category) {
            Some(entry) => entry.count += 1,
            None => counts.push(CategoryInfo {
                name: product.category.clone(),
                count: 1,
            }),
        }
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, price: f64, rating: f64, stock: u32, category: &str) -> Product {
        Product {
            id,
            title: format!("Product {}", id),
            price,
            rating,
            stock,
            category: category.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_list_yields_zero_value() {
        let metrics = compute_metrics(&[]);
        assert_eq!(metrics.average_price, 0.0);
        assert!(metrics.top_low_stock_high_rated.is_empty());
        assert!(metrics.top_categories.is_empty());
        assert_eq!(metrics.total_products, 0);
    }

    #[test]
    fn test_average_price() {
        let products = vec![
            product(1, 10.0, 3.0, 50, "a"),
            product(2, 20.0, 3.0, 50, "a"),
            product(3, 30.0, 3.0, 50, "b"),
        ];
        let metrics = compute_metrics(&products);
        assert!((metrics.average_price - 20.0).abs() < 1e-9);
        assert_eq!(metrics.total_products, 3);
    }

    #[test]
    fn test_shortlist_filters_and_sorts_by_stock() {
        let products = vec![
            product(1, 10.0, 4.8, 5, "a"),
            product(2, 10.0, 4.9, 2, "a"),
            product(3, 10.0, 4.0, 1, "a"),
        ];
        let metrics = compute_metrics(&products);

        let stocks: Vec<u32> = metrics
            .top_low_stock_high_rated
            .iter()
            .map(|p| p.stock)
            .collect();
        assert_eq!(stocks, vec![2, 5]);
    }

    #[test]
    fn test_shortlist_capped_at_three() {
        let products: Vec<Product> = (1..=5)
            .map(|i| product(i, 10.0, 4.7, i as u32 * 10, "a"))
            .collect();
        let metrics = compute_metrics(&products);
        assert_eq!(metrics.top_low_stock_high_rated.len(), 3);
        assert_eq!(metrics.top_low_stock_high_rated[0].stock, 10);
    }

    #[test]
    fn test_shortlist_stock_ties_keep_input_order() {
        let products = vec![
            product(1, 10.0, 4.6, 7, "a"),
            product(2, 10.0, 4.9, 7, "a"),
            product(3, 10.0, 4.7, 7, "a"),
        ];
        let metrics = compute_metrics(&products);

        let ids: Vec<u64> = metrics
            .top_low_stock_high_rated
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_single_category_counts_everything() {
        let products: Vec<Product> = (1..=4)
            .map(|i| product(i, 1.0, 1.0, 1, "smartphones"))
            .collect();
        let metrics = compute_metrics(&products);

        assert_eq!(
            metrics.top_categories,
            vec![CategoryInfo {
                name: "smartphones".to_string(),
                count: 4
            }]
        );
    }

    #[test]
    fn test_top_categories_ranked_descending() {
        let mut products = Vec::new();
        for i in 0..5 {
            products.push(product(i, 1.0, 1.0, 1, "laptops"));
        }
        for i in 5..8 {
            products.push(product(i, 1.0, 1.0, 1, "phones"));
        }
        for i in 8..10 {
            products.push(product(i, 1.0, 1.0, 1, "fragrances"));
        }
        products.push(product(10, 1.0, 1.0, 1, "groceries"));

        let metrics = compute_metrics(&products);
        let names: Vec<&str> = metrics
            .top_categories
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["laptops", "phones", "fragrances"]);
        assert_eq!(metrics.top_categories[0].count, 5);
    }

    #[test]
    fn test_category_count_ties_keep_first_seen_order() {
        let products = vec![
            product(1, 1.0, 1.0, 1, "zeta"),
            product(2, 1.0, 1.0, 1, "alpha"),
            product(3, 1.0, 1.0, 1, "zeta"),
            product(4, 1.0, 1.0, 1, "alpha"),
        ];
        let metrics = compute_metrics(&products);

        let names: Vec<&str> = metrics
            .top_categories
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        // "zeta" was encountered first, so it wins the tie.
        assert_eq!(names, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_categories_grouped_by_exact_string() {
        let products = vec![
            product(1, 1.0, 1.0, 1, "Phones"),
            product(2, 1.0, 1.0, 1, "phones"),
        ];
        let metrics = compute_metrics(&products);
        // No case folding: these are distinct categories.
        assert_eq!(metrics.top_categories.len(), 2);
    }

    #[test]
    fn test_rerun_is_identical() {
        let products = vec![
            product(1, 9.99, 4.5, 3, "a"),
            product(2, 19.99, 4.5, 3, "b"),
            product(3, 29.99, 4.8, 1, "a"),
        ];
        let first = compute_metrics(&products);
        let second = compute_metrics(&products);
        assert_eq!(first, second);
    }
}
