use anyhow::{bail, Result};
use clap::Args;
use jikan_api::query::{ScheduleDay, Season, SeasonFilter};
use jikan_api::{Client, PagedQuery, ScheduleQuery, SeasonQuery};

use super::{parse_wire, walk_pages, PageArgs};
use crate::output::{build_anime_rows, print_json, print_rows, OutputFormat};

#[derive(Args)]
pub struct SeasonArgs {
    /// `now` or `upcoming`; omit when using --year and --season
    #[arg(value_parser = ["now", "upcoming"])]
    pub which: Option<String>,

    /// Year of an archived season
    #[arg(long, requires = "season")]
    pub year: Option<u32>,

    /// Season of the year: winter, spring, summer, fall
    #[arg(long, requires = "year")]
    pub season: Option<String>,

    /// Entry type: tv, movie, ova, special, ona, music
    #[arg(long)]
    pub filter: Option<String>,

    /// Exclude adult entries
    #[arg(long)]
    pub sfw: bool,

    #[command(flatten)]
    pub paging: PageArgs,
}

#[derive(Args)]
pub struct ScheduleArgs {
    /// Day of the week (monday..sunday), other or unknown
    #[arg(long)]
    pub day: Option<String>,

    /// Exclude adult entries
    #[arg(long)]
    pub sfw: bool,

    #[command(flatten)]
    pub paging: PageArgs,
}

pub async fn run_season(args: &SeasonArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut query = SeasonQuery::default();
    if let Some(filter) = &args.filter {
        query = query.with_filter(parse_wire::<SeasonFilter>("filter", filter)?);
    }
    if args.sfw {
        query = query.with_sfw(true);
    }
    if let Some(limit) = args.paging.limit {
        query = query.with_limit(limit);
    }

    let anime = match (args.which.as_deref(), args.year, args.season.as_deref()) {
        (Some("upcoming"), None, None) => {
            walk_pages(&args.paging, |page| {
                let query = query.clone().with_page(page);
                async move { client.seasons.upcoming(&query).await }
            })
            .await?
        }
        (Some(_), None, None) | (None, None, None) => {
            walk_pages(&args.paging, |page| {
                let query = query.clone().with_page(page);
                async move { client.seasons.current(&query).await }
            })
            .await?
        }
        (None, Some(year), Some(season)) => {
            let season = parse_wire::<Season>("season", season)?;
            walk_pages(&args.paging, |page| {
                let query = query.clone().with_page(page);
                async move { client.seasons.season(year, season, &query).await }
            })
            .await?
        }
        _ => bail!("use either `now`/`upcoming` or --year with --season"),
    };

    match format {
        OutputFormat::Json => print_json(&anime),
        _ => print_rows(build_anime_rows(&anime), format)?,
    }

    Ok(())
}

pub async fn run_schedule(
    args: &ScheduleArgs,
    client: &Client,
    format: &OutputFormat,
) -> Result<()> {
    let mut query = ScheduleQuery::default();
    if let Some(day) = &args.day {
        query = query.with_day(parse_wire::<ScheduleDay>("day", day)?);
    }
    if args.sfw {
        query = query.with_sfw(true);
    }
    if let Some(limit) = args.paging.limit {
        query = query.with_limit(limit);
    }

    let anime = walk_pages(&args.paging, |page| {
        let query = query.clone().with_page(page);
        async move { client.schedules.schedules(&query).await }
    })
    .await?;

    match format {
        OutputFormat::Json => print_json(&anime),
        _ => print_rows(build_anime_rows(&anime), format)?,
    }

    Ok(())
}
