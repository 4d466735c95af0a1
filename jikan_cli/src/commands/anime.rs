use anyhow::Result;
use clap::Args;
use jikan_api::query::{AnimeOrderBy, AnimeRating, AnimeStatus, AnimeType};
use jikan_api::{AnimeQuery, Client, PagedQuery, SortDirection};

use super::{parse_wire, walk_pages, PageArgs};
use crate::output::{build_anime_rows, print_json, print_rows, OutputFormat};

#[derive(Args)]
pub struct AnimeArgs {
    /// Get a single anime by MyAnimeList ID
    #[arg(long)]
    pub id: Option<u32>,

    /// Search by title
    #[arg(long)]
    pub search: Option<String>,

    /// Filter by type: tv, movie, ova, special, ona, music
    #[arg(long = "type")]
    pub anime_type: Option<String>,

    /// Filter by status: airing, complete, upcoming
    #[arg(long)]
    pub status: Option<String>,

    /// Filter by age rating: g, pg, pg13, r17, r, rx
    #[arg(long)]
    pub rating: Option<String>,

    /// Minimum score
    #[arg(long)]
    pub min_score: Option<f64>,

    /// Maximum score
    #[arg(long)]
    pub max_score: Option<f64>,

    /// Comma-separated genre IDs
    #[arg(long)]
    pub genres: Option<String>,

    /// Sort field: mal_id, title, start_date, end_date, episodes, score, scored_by, rank, popularity, members, favorites
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

pub fn build_query(args: &AnimeArgs) -> Result<AnimeQuery> {
    let mut query = AnimeQuery::default();

    if let Some(search) = &args.search {
        query = query.with_search(search);
    }
    if let Some(value) = &args.anime_type {
        query = query.with_type(parse_wire::<AnimeType>("type", value)?);
    }
    if let Some(value) = &args.status {
        query = query.with_status(parse_wire::<AnimeStatus>("status", value)?);
    }
    if let Some(value) = &args.rating {
        query = query.with_rating(parse_wire::<AnimeRating>("rating", value)?);
    }
    if let Some(min) = args.min_score {
        query = query.with_min_score(min);
    }
    if let Some(max) = args.max_score {
        query = query.with_max_score(max);
    }
    if let Some(genres) = &args.genres {
        query = query.with_genres(genres);
    }
    if args.sfw {
        query = query.with_sfw(true);
    }
    if let Some(value) = &args.order_by {
        query = query.with_order_by(parse_wire::<AnimeOrderBy>("order-by", value)?);
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

pub async fn run(args: &AnimeArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    if let Some(id) = args.id {
        let resp = client.anime.by_id(id).await?;
        match format {
            OutputFormat::Json => print_json(&resp.data),
            _ => print_rows(build_anime_rows(&[resp.data]), format)?,
        }
        return Ok(());
    }

    let query = build_query(args)?;
    let anime = walk_pages(&args.paging, |page| {
        let query = query.clone().with_page(page);
        async move { client.anime.search(&query).await }
    })
    .await?;

    match format {
        OutputFormat::Json => print_json(&anime),
        _ => print_rows(build_anime_rows(&anime), format)?,
    }

    Ok(())
}
