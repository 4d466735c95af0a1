use anyhow::Result;
use clap::Args;
use jikan_api::Client;

use crate::output::{
    build_anime_rows, build_character_rows, build_manga_rows, build_person_rows, print_json,
    print_rows, OutputFormat,
};

#[derive(Args)]
pub struct RandomArgs {
    /// What to pick: anime, manga, character, person
    #[arg(value_parser = ["anime", "manga", "character", "person"])]
    pub kind: String,
}

pub async fn run(args: &RandomArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    match args.kind.as_str() {
        "manga" => {
            let resp = client.random.manga().await?;
            match format {
                OutputFormat::Json => print_json(&resp.data),
                _ => print_rows(build_manga_rows(&[resp.data]), format)?,
            }
        }
        "character" => {
            let resp = client.random.character().await?;
            match format {
                OutputFormat::Json => print_json(&resp.data),
                _ => print_rows(build_character_rows(&[resp.data]), format)?,
            }
        }
        "person" => {
            let resp = client.random.person().await?;
            match format {
                OutputFormat::Json => print_json(&resp.data),
                _ => print_rows(build_person_rows(&[resp.data]), format)?,
            }
        }
        _ => {
            let resp = client.random.anime().await?;
            match format {
                OutputFormat::Json => print_json(&resp.data),
                _ => print_rows(build_anime_rows(&[resp.data]), format)?,
            }
        }
    }

    Ok(())
}
