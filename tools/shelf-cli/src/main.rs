//! Shelf CLI - Terminal dashboard for the ShelfScope catalog.
//!
//! Commands:
//! - `shelf metrics` - Metric cards: average price, low-stock/high-rated
//!   shortlist, top categories
//! - `shelf products` - One page of the product table
//! - `shelf product` - One product's detail card
//! - `shelf categories` - List catalog categories
//! - `shelf browse` - Interactive paginated browser

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BrowseArgs, CategoriesArgs, MetricsArgs, ProductArgs, ProductsArgs};

/// Shelf CLI - Browse catalog products and metrics from the terminal
#[derive(Parser)]
#[command(name = "shelf")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Catalog API base URL (overrides config)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show catalog metric cards
    Metrics(MetricsArgs),

    /// Show one page of the product table
    Products(ProductsArgs),

    /// Show one product's detail card
    Product(ProductArgs),

    /// List catalog categories
    Categories(CategoriesArgs),

    /// Browse the catalog interactively
    Browse(BrowseArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config, apply CLI overrides
    let ctx = context::Context::load(cli.config.as_deref(), cli.base_url.as_deref(), output)?;

    // Execute command
    let result = match cli.command {
        Commands::Metrics(args) => commands::metrics::run(args, &ctx).await,
        Commands::Products(args) => commands::products::run(args, &ctx).await,
        Commands::Product(args) => commands::product::run(args, &ctx).await,
        Commands::Categories(args) => commands::categories::run(args, &ctx).await,
        Commands::Browse(args) => commands::browse::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("shelf_data=debug")
    } else {
        EnvFilter::from_default_env()
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
