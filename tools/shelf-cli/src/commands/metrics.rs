//! Metric card command.

use anyhow::{Context as _, Result};
use console::style;
use shelf_core::compute_metrics;
use shelf_data::ProductSource;

use super::MetricsArgs;
use crate::context::Context;

/// Run the metrics command.
pub async fn run(args: MetricsArgs, ctx: &Context) -> Result<()> {
    let spinner = ctx.output.spinner("Fetching products...");
    let response = ctx
        .client
        .products(args.category.as_deref())
        .await
        .context("Failed to fetch products");
    spinner.finish_and_clear();

    let metrics = compute_metrics(&response?.products);

    if ctx.output.is_json() {
        println!("{}", serde_json::to_string_pretty(&metrics)?);
        return Ok(());
    }

    let scope = match args.category.as_deref() {
        Some(cat) => format!("Catalog Metrics — {}", cat),
        None => "Catalog Metrics".to_string(),
    };
    ctx.output.header(&scope);

    // Average price card
    println!(
        "\n{}\n  {} {}",
        style("Average Price").bold(),
        style(format!("${:.2}", metrics.average_price)).green().bold(),
        style(format!("across {} products", metrics.total_products)).dim()
    );

    // Low stock / high rated card
    println!("\n{}", style("Low Stock & High Rated").bold());
    if metrics.top_low_stock_high_rated.is_empty() {
        println!("  {}", style("No products found").dim());
    } else {
        for product in &metrics.top_low_stock_high_rated {
            println!(
                "  {:<40} {} {}",
                product.title,
                style(format!("{} left", product.stock)).yellow(),
                style(format!("★ {:.1}", product.rating)).dim()
            );
        }
    }
    ctx.output
        .footer("  Products with rating 4.5+ sorted by lowest stock");

    // Top categories card
    println!("\n{}", style("Top Categories").bold());
    for (i, category) in metrics.top_categories.iter().enumerate() {
        println!(
            "  {} {:<24} {}",
            style(format!("{}.", i + 1)).dim(),
            category.name,
            style(format!("{} products", category.count)).dim()
        );
    }
    ctx.output.blank();

    Ok(())
}
