//! Product detail command.

use anyhow::{Context as _, Result};
use console::style;
use shelf_core::Product;
use shelf_data::ProductSource;

use super::ProductArgs;
use crate::context::Context;

/// Run the product detail command.
pub async fn run(args: ProductArgs, ctx: &Context) -> Result<()> {
    let spinner = ctx.output.spinner("Fetching product...");
    let result = ctx
        .client
        .product(args.id)
        .await
        .with_context(|| format!("Failed to fetch product {}", args.id));
    spinner.finish_and_clear();

    let product = result?;

    if ctx.output.is_json() {
        println!("{}", serde_json::to_string_pretty(&product)?);
        return Ok(());
    }

    // Badge line: category, then brand when present.
    let mut badges = format!("[{}]", product.category);
    if !product.brand.is_empty() {
        badges.push_str(&format!(" [{}]", product.brand));
    }
    println!("\n{}", style(badges).cyan());
    println!("{}", style(&product.title).bold().underlined());

    if !product.description.is_empty() {
        println!("\n{}", product.description);
    }

    // Stat cards
    println!("\n{}", style("Price").bold());
    println!("  {}", style(format!("${:.2}", product.price)).green().bold());
    if let Some(line) = discount_line(&product) {
        println!("  {}", style(line).green());
    }

    println!("\n{}", style("Rating").bold());
    println!(
        "  {} {}",
        style(format!("★ {:.1}", product.rating)).yellow(),
        style("out of 5").dim()
    );

    println!("\n{}", style("Stock").bold());
    let stock = if product.is_low_stock() {
        style(product.stock.to_string()).red().bold()
    } else {
        style(product.stock.to_string()).green().bold()
    };
    println!("  {} {}", stock, style(stock_label(&product)).dim());

    println!("\n{}", style("Product ID").bold());
    println!("  #{}", product.id);
    ctx.output.blank();

    Ok(())
}

/// Discount note shown under the price, when a discount applies.
fn discount_line(product: &Product) -> Option<String> {
    if product.discount_percentage > 0.0 {
        Some(format!(
            "{:.1}% off (${:.2} after discount)",
            product.discount_percentage,
            product.discounted_price()
        ))
    } else {
        None
    }
}

/// Availability label shown next to the stock count.
fn stock_label(product: &Product) -> &'static str {
    if product.is_low_stock() {
        "Low stock"
    } else {
        "In stock"
    }
}
