//! CLI command implementations.

pub mod browse;
pub mod categories;
pub mod metrics;
pub mod product;
pub mod products;

use clap::Args;
use shelf_core::PageSize;

/// Arguments for `shelf metrics`.
#[derive(Args)]
pub struct MetricsArgs {
    /// Restrict metrics to one category
    #[arg(long)]
    pub category: Option<String>,
}

/// Arguments for `shelf products`.
#[derive(Args)]
pub struct ProductsArgs {
    /// Filter by category slug
    #[arg(long)]
    pub category: Option<String>,

    /// Page to show (1-indexed; out-of-range values clamp)
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Rows per page (one of 10, 20, 50, 100)
    #[arg(long, value_parser = parse_page_size)]
    pub size: Option<PageSize>,
}

/// Arguments for `shelf product`.
#[derive(Args)]
pub struct ProductArgs {
    /// Product id
    pub id: u64,
}

/// Arguments for `shelf categories`.
#[derive(Args)]
pub struct CategoriesArgs {}

/// Arguments for `shelf browse`.
#[derive(Args)]
pub struct BrowseArgs {
    /// Start with a category filter applied
    #[arg(long)]
    pub category: Option<String>,

    /// Rows per page (one of 10, 20, 50, 100)
    #[arg(long, value_parser = parse_page_size)]
    pub size: Option<PageSize>,
}

fn parse_page_size(s: &str) -> Result<PageSize, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("invalid page size: {}", s))?;
    PageSize::from_value(value)
        .ok_or_else(|| format!("page size must be one of 10, 20, 50, 100 (got {})", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_page_size() {
        assert_eq!(parse_page_size("20"), Ok(PageSize::Twenty));
        assert!(parse_page_size("15").is_err());
        assert!(parse_page_size("abc").is_err());
    }
}
