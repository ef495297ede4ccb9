//! Product table command.

use anyhow::{Context as _, Result};
use console::style;
use serde::Serialize;
use shelf_core::{PageBounds, Pager, Product};
use shelf_data::ProductSource;

use super::ProductsArgs;
use crate::context::Context;

#[derive(Serialize)]
struct PageOutput<'a> {
    visible: &'a [Product],
    page: usize,
    total_pages: usize,
    total: usize,
}

/// Run the products command.
pub async fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let spinner = ctx.output.spinner("Fetching products...");
    let response = ctx
        .client
        .products(args.category.as_deref())
        .await
        .context("Failed to fetch products");
    spinner.finish_and_clear();

    let products = response?.products;
    ctx.output
        .debug(&format!("{} products fetched", products.len()));

    let mut pager = Pager::new(args.size.unwrap_or_else(|| ctx.default_page_size()));
    pager.select_category(args.category.as_deref());
    pager.request_page(args.page, products.len());

    let view = pager.view(&products);

    if ctx.output.is_json() {
        let out = PageOutput {
            visible: view.visible,
            page: view.bounds.page,
            total_pages: view.bounds.total_pages,
            total: view.bounds.total,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    let title = match pager.category() {
        Some(cat) => format!("Products — {}", cat),
        None => "Products".to_string(),
    };
    ctx.output.header(&title);

    print_product_table(ctx, view.visible);
    print_table_footer(ctx, &view.bounds);

    Ok(())
}

/// Render a product slice as a table.
pub fn print_product_table(ctx: &Context, products: &[Product]) {
    if products.is_empty() {
        ctx.output.info("No products to show.");
        return;
    }

    let rows: Vec<Vec<String>> = products
        .iter()
        .map(|p| {
            let brand = if p.brand.is_empty() { "N/A" } else { &p.brand };
            let stock = if p.is_low_stock() {
                style(p.stock.to_string()).red().to_string()
            } else {
                style(p.stock.to_string()).green().to_string()
            };
            vec![
                p.id.to_string(),
                truncate(&p.title, 38),
                brand.to_string(),
                p.category.clone(),
                format!("${:.2}", p.price),
                stock,
                format!("★ {:.1}", p.rating),
            ]
        })
        .collect();

    ctx.output.table(
        &["ID", "Product", "Brand", "Category", "Price", "Stock", "Rating"],
        &rows,
    );
}

/// Render the "Showing X-Y of Z" footer with the page indicator.
pub fn print_table_footer(ctx: &Context, bounds: &PageBounds) {
    ctx.output.footer(&format!(
        "Showing {}-{} of {} products | Page {} of {}",
        bounds.start_item(),
        bounds.end_item(),
        bounds.total,
        bounds.page,
        bounds.total_pages
    ));
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long product title", 10), "a very lo…");
    }
}
