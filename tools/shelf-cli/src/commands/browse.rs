//! Interactive catalog browser.

use std::time::Duration;

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use shelf_cache::{QueryCache, QueryKey, QueryStatus};
use shelf_core::{PageSize, Pager, PagerEvent, Product};
use shelf_data::{CategoryEntry, ProductSource};

use super::products::{print_product_table, print_table_footer};
use super::BrowseArgs;
use crate::context::Context;

enum MenuAction {
    Next,
    Prev,
    First,
    Last,
    Jump,
    ChangeSize,
    ChangeCategory,
    Refresh,
    Quit,
}

/// Run the interactive browse loop.
pub async fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        anyhow::bail!("browse is interactive and does not support --json");
    }

    let mut cache: QueryCache<Vec<Product>> =
        QueryCache::new().with_max_age(Duration::from_secs(ctx.config.cache.max_age_secs));

    let mut pager = Pager::new(args.size.unwrap_or_else(|| ctx.default_page_size()));
    pager.select_category(args.category.as_deref());

    // Categories and the first product list load concurrently.
    let spinner = ctx.output.spinner("Loading catalog...");
    let (categories_result, products_result) =
        futures::join!(ctx.client.categories(), ctx.client.products(pager.category()));
    spinner.finish_and_clear();

    let categories = categories_result.unwrap_or_else(|e| {
        ctx.output.warn(&format!("Could not load categories: {}", e));
        Vec::new()
    });

    let key = products_key(&pager);
    let ticket = cache.begin(&key);
    match products_result {
        Ok(resp) => cache.resolve(ticket, resp.products)?,
        Err(e) => cache.fail(ticket, e.to_string())?,
    }

    loop {
        let key = products_key(&pager);

        if cache.get(&key).is_none() && cache.status(&key) != Some(QueryStatus::Error) {
            fetch_into_cache(ctx, &mut cache, &key, pager.category()).await?;
        }

        if let Some(error) = cache.error(&key) {
            ctx.output.error(&format!("Failed to fetch products: {}", error));
            if !prompt_retry()? {
                break;
            }
            cache.invalidate(&key);
            continue;
        }

        let products: Vec<Product> = cache.get(&key).cloned().unwrap_or_default();
        let view = pager.view(&products);

        let title = match pager.category() {
            Some(cat) => format!("Products — {}", cat),
            None => "Products".to_string(),
        };
        ctx.output.header(&title);
        print_product_table(ctx, view.visible);
        print_table_footer(ctx, &view.bounds);

        let bounds = view.bounds;
        let mut actions: Vec<(MenuAction, String)> = Vec::new();
        if bounds.has_next {
            actions.push((MenuAction::Next, "Next page".to_string()));
        }
        if bounds.has_prev {
            actions.push((MenuAction::Prev, "Previous page".to_string()));
        }
        if !bounds.is_first() {
            actions.push((MenuAction::First, "First page".to_string()));
        }
        if !bounds.is_last() {
            actions.push((MenuAction::Last, "Last page".to_string()));
        }
        if bounds.total_pages > 1 {
            actions.push((MenuAction::Jump, "Jump to page".to_string()));
        }
        actions.push((
            MenuAction::ChangeSize,
            format!("Rows per page (now {})", pager.size().as_usize()),
        ));
        if !categories.is_empty() {
            actions.push((MenuAction::ChangeCategory, "Change category".to_string()));
        }
        actions.push((MenuAction::Refresh, "Refresh".to_string()));
        actions.push((MenuAction::Quit, "Quit".to_string()));

        let labels: Vec<&str> = actions.iter().map(|(_, label)| label.as_str()).collect();
        let selection = Select::with_theme(&ColorfulTheme::default())
            .items(&labels)
            .default(0)
            .interact()?;

        match actions[selection].0 {
            MenuAction::Next => {
                pager.apply(PagerEvent::PageRequested(bounds.page + 1), products.len())
            }
            MenuAction::Prev => pager.apply(
                PagerEvent::PageRequested(bounds.page.saturating_sub(1)),
                products.len(),
            ),
            MenuAction::First => pager.apply(PagerEvent::PageRequested(1), products.len()),
            MenuAction::Last => {
                pager.apply(PagerEvent::PageRequested(bounds.total_pages), products.len())
            }
            MenuAction::Jump => {
                let page: usize = Input::with_theme(&ColorfulTheme::default())
                    .with_prompt(format!("Page number (1-{})", bounds.total_pages))
                    .interact_text()?;
                pager.apply(PagerEvent::PageRequested(page), products.len());
            }
            MenuAction::ChangeSize => {
                let size = prompt_page_size(pager.size())?;
                pager.apply(PagerEvent::SizeSelected(size), products.len());
            }
            MenuAction::ChangeCategory => {
                let category = prompt_category(&categories, pager.category())?;
                // A changed filter resets to page 1; the cache keeps the
                // old filter's list, so switching back is a cache hit.
                pager.apply(PagerEvent::CategorySelected(category), products.len());
            }
            MenuAction::Refresh => {
                cache.invalidate(&key);
            }
            MenuAction::Quit => break,
        }
    }

    Ok(())
}

fn products_key(pager: &Pager) -> QueryKey {
    QueryKey::new("products", pager.category())
}

async fn fetch_into_cache(
    ctx: &Context,
    cache: &mut QueryCache<Vec<Product>>,
    key: &QueryKey,
    category: Option<&str>,
) -> Result<()> {
    let ticket = cache.begin(key);
    let spinner = ctx.output.spinner("Fetching products...");
    let result = ctx.client.products(category).await;
    spinner.finish_and_clear();

    match result {
        Ok(resp) => cache.resolve(ticket, resp.products)?,
        Err(e) => cache.fail(ticket, e.to_string())?,
    }
    Ok(())
}

fn prompt_retry() -> Result<bool> {
    let selection = Select::with_theme(&ColorfulTheme::default())
        .items(&["Retry", "Quit"])
        .default(0)
        .interact()?;
    Ok(selection == 0)
}

fn prompt_page_size(current: PageSize) -> Result<PageSize> {
    let labels: Vec<String> = PageSize::ALL
        .iter()
        .map(|s| s.as_usize().to_string())
        .collect();
    let default = PageSize::ALL.iter().position(|s| *s == current).unwrap_or(0);

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Rows per page")
        .items(&labels)
        .default(default)
        .interact()?;
    Ok(PageSize::ALL[selection])
}

fn prompt_category(
    categories: &[CategoryEntry],
    current: Option<&str>,
) -> Result<Option<String>> {
    let mut labels: Vec<&str> = vec!["All categories"];
    labels.extend(categories.iter().map(|c| c.slug.as_str()));

    let default = match current {
        Some(cat) => categories
            .iter()
            .position(|c| c.slug == cat)
            .map(|i| i + 1)
            .unwrap_or(0),
        None => 0,
    };

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Category")
        .items(&labels)
        .default(default)
        .interact()?;

    if selection == 0 {
        Ok(None)
    } else {
        Ok(Some(categories[selection - 1].slug.clone()))
    }
}
