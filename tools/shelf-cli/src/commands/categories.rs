//! Category listing command.

use anyhow::{Context as _, Result};
use shelf_data::ProductSource;

use super::CategoriesArgs;
use crate::context::Context;

/// Run the categories command.
pub async fn run(_args: CategoriesArgs, ctx: &Context) -> Result<()> {
    let spinner = ctx.output.spinner("Fetching categories...");
    let result = ctx
        .client
        .categories()
        .await
        .context("Failed to fetch categories");
    spinner.finish_and_clear();

    let categories = result?;

    if ctx.output.is_json() {
        println!("{}", serde_json::to_string_pretty(&categories)?);
        return Ok(());
    }

    ctx.output.header("Categories");

    let rows: Vec<Vec<String>> = categories
        .iter()
        .map(|c| vec![c.slug.clone(), c.name.clone()])
        .collect();
    ctx.output.table(&["Slug", "Name"], &rows);
    ctx.output
        .footer(&format!("{} categories", categories.len()));

    Ok(())
}
