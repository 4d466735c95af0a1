use anyhow::Result;
use clap::Args;
use jikan_api::{Client, PagedQuery, TopQuery};

use super::{walk_pages, PageArgs};
use crate::output::{
    build_anime_rows, build_character_rows, build_manga_rows, build_person_rows, print_json,
    print_rows, OutputFormat,
};

#[derive(Args)]
pub struct TopArgs {
    /// What to rank: anime, manga, characters, people
    #[arg(value_parser = ["anime", "manga", "characters", "people"])]
    pub kind: String,

    /// List filter, e.g. airing, upcoming, bypopularity, favorite (anime and manga only)
    #[arg(long)]
    pub filter: Option<String>,

    /// Entry type, e.g. tv, movie, manga, novel (anime and manga only)
    #[arg(long = "type")]
    pub entry_type: Option<String>,

    #[command(flatten)]
    pub paging: PageArgs,
}

pub async fn run(args: &TopArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut query = TopQuery::default();
    if let Some(filter) = &args.filter {
        query = query.with_filter(filter);
    }
    if let Some(entry_type) = &args.entry_type {
        query = query.with_type(entry_type);
    }
    if let Some(limit) = args.paging.limit {
        query = query.with_limit(limit);
    }

    match args.kind.as_str() {
        "manga" => {
            let manga = walk_pages(&args.paging, |page| {
                let query = query.clone().with_page(page);
                async move { client.top.manga(&query).await }
            })
            .await?;
            match format {
                OutputFormat::Json => print_json(&manga),
                _ => print_rows(build_manga_rows(&manga), format)?,
            }
        }
        "characters" => {
            let characters = walk_pages(&args.paging, |page| {
                let query = query.clone().with_page(page);
                async move { client.top.characters(&query).await }
            })
            .await?;
            match format {
                OutputFormat::Json => print_json(&characters),
                _ => print_rows(build_character_rows(&characters), format)?,
            }
        }
        "people" => {
            let people = walk_pages(&args.paging, |page| {
                let query = query.clone().with_page(page);
                async move { client.top.people(&query).await }
            })
            .await?;
            match format {
                OutputFormat::Json => print_json(&people),
                _ => print_rows(build_person_rows(&people), format)?,
            }
        }
        _ => {
            let anime = walk_pages(&args.paging, |page| {
                let query = query.clone().with_page(page);
                async move { client.top.anime(&query).await }
            })
            .await?;
            match format {
                OutputFormat::Json => print_json(&anime),
                _ => print_rows(build_anime_rows(&anime), format)?,
            }
        }
    }

    Ok(())
}
