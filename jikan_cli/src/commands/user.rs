use anyhow::{Context, Result};
use clap::Args;
use jikan_api::Client;

use crate::output::{build_user_rows, print_json, print_rows, OutputFormat};

#[derive(Args)]
pub struct UserArgs {
    /// MyAnimeList username
    pub username: String,
}

pub async fn run(args: &UserArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let resp = client
        .users
        .profile(&args.username)
        .await
        .with_context(|| format!("failed to fetch profile of {}", args.username))?;

    match format {
        OutputFormat::Json => print_json(&resp.data),
        _ => print_rows(build_user_rows(&[resp.data]), format)?,
    }

    Ok(())
}
