use anyhow::Result;
use clap::Args;
use jikan_api::query::{MangaOrderBy, MangaStatus, MangaType};
use jikan_api::{Client, MangaQuery, PagedQuery, SortDirection};

use super::{parse_wire, walk_pages, PageArgs};
use crate::output::{build_manga_rows, print_json, print_rows, OutputFormat};

#[derive(Args)]
pub struct MangaArgs {
    /// Get a single manga by MyAnimeList ID
    #[arg(long)]
    pub id: Option<u32>,

    /// Search by title
    #[arg(long)]
    pub search: Option<String>,

    /// Filter by type: manga, novel, lightnovel, oneshot, doujin, manhwa, manhua
    #[arg(long = "type")]
    pub manga_type: Option<String>,

    /// Filter by status: publishing, complete, hiatus, discontinued, upcoming
    #[arg(long)]
    pub status: Option<String>,

    /// Minimum score
    #[arg(long)]
    pub min_score: Option<f64>,

    /// Comma-separated genre IDs
    #[arg(long)]
    pub genres: Option<String>,

    /// Comma-separated magazine IDs
    #[arg(long)]
    pub magazines: Option<String>,

    /// Sort field: mal_id, title, start_date, end_date, chapters, volumes, score, scored_by, rank, popularity, members, favorites
    #[arg(long)]
    pub order_by: Option<String>,

    /// Sort ascending instead of descending
    #[arg(long)]
    pub asc: bool,

    /// Exclude adult entries
    #[arg(long)]
    pub sfw: bool,

    #[command(flatten)]
    pub paging: PageArgs,
}

fn build_query(args: &MangaArgs) -> Result<MangaQuery> {
    let mut query = MangaQuery::default();

    if let Some(search) = &args.search {
        query = query.with_search(search);
    }
    if let Some(value) = &args.manga_type {
        query = query.with_type(parse_wire::<MangaType>("type", value)?);
    }
    if let Some(value) = &args.status {
        query = query.with_status(parse_wire::<MangaStatus>("status", value)?);
    }
    if let Some(min) = args.min_score {
        query = query.with_min_score(min);
    }
    if let Some(genres) = &args.genres {
        query = query.with_genres(genres);
    }
    if let Some(magazines) = &args.magazines {
        query = query.with_magazines(magazines);
    }
    if args.sfw {
        query = query.with_sfw(true);
    }
    if let Some(value) = &args.order_by {
        query = query.with_order_by(parse_wire::<MangaOrderBy>("order-by", value)?);
        query = query.with_sort(if args.asc {
            SortDirection::Asc
        } else {
            SortDirection::Desc
        });
    }
    if let Some(limit) = args.paging.limit {
        query = query.with_limit(limit);
    }

    Ok(query)
}

pub async fn run(args: &MangaArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    if let Some(id) = args.id {
        let resp = client.manga.by_id(id).await?;
        match format {
            OutputFormat::Json => print_json(&resp.data),
            _ => print_rows(build_manga_rows(&[resp.data]), format)?,
        }
        return Ok(());
    }

    let query = build_query(args)?;
    let manga = walk_pages(&args.paging, |page| {
        let query = query.clone().with_page(page);
        async move { client.manga.search(&query).await }
    })
    .await?;

    match format {
        OutputFormat::Json => print_json(&manga),
        _ => print_rows(build_manga_rows(&manga), format)?,
    }

    Ok(())
}
