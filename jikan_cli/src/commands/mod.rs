//! CLI subcommand implementations.

pub mod anime;
pub mod manga;
pub mod random;
pub mod seasons;
pub mod top;
pub mod user;

use std::future::Future;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use clap::Args;
use jikan_api::types::PaginatedResponse;

/// Paging flags shared by every listing subcommand.
#[derive(Args, Clone, Debug)]
pub struct PageArgs {
    /// First page to fetch
    #[arg(long, default_value = "1")]
    pub page: u32,

    /// Results per page
    #[arg(long)]
    pub limit: Option<u32>,

    /// Number of pages to fetch, stopping early on the last page
    #[arg(long, default_value = "1")]
    pub pages: u32,

    /// Delay between page requests in milliseconds
    #[arg(long, default_value = "1000")]
    pub delay_ms: u64,
}

/// Fetches up to `args.pages` consecutive pages starting at `args.page`,
/// sleeping `args.delay_ms` between requests so the public API's rate
/// limit is respected.
pub async fn walk_pages<T, F, Fut>(args: &PageArgs, mut fetch: F) -> Result<Vec<T>>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<PaginatedResponse<T>, jikan_api::Error>>,
{
    let mut items = Vec::new();
    let mut page = args.page;

    for fetched in 0..args.pages.max(1) {
        if fetched > 0 {
            tokio::time::sleep(Duration::from_millis(args.delay_ms)).await;
        }
        tracing::debug!("Fetching page {}", page);
        let resp = fetch(page)
            .await
            .with_context(|| format!("failed to fetch page {}", page))?;

        match &resp.pagination.items {
            Some(counts) => eprintln!(
                "Page {}/{} ({} total)",
                page, resp.pagination.last_visible_page, counts.total
            ),
            None => eprintln!("Page {}/{}", page, resp.pagination.last_visible_page),
        }

        items.extend(resp.data);
        if !resp.pagination.has_next_page {
            break;
        }
        match page.checked_add(1) {
            Some(next) => page = next,
            None => break,
        }
    }

    Ok(items)
}

/// Parses a flag value into one of the API's wire enums.
pub fn parse_wire<T: FromStr>(flag: &str, value: &str) -> Result<T> {
    value
        .parse::<T>()
        .map_err(|_| anyhow!("invalid value for --{}: {}", flag, value))
}
