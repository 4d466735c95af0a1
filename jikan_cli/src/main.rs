mod commands;
mod output;

use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use jikan_api::{Client, ClientConfig};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "jikan")]
#[command(about = "Query anime and manga data from the Jikan API (MyAnimeList)")]
struct Cli {
    /// Output format: table, json, csv or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// API base URL
    #[arg(long, default_value = jikan_api::DEFAULT_BASE_URL, global = true)]
    base_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value = "30", global = true)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up an anime by ID or search anime
    Anime(commands::anime::AnimeArgs),
    /// Look up a manga by ID or search manga
    Manga(commands::manga::MangaArgs),
    /// Top-ranked anime, manga, characters or people
    Top(commands::top::TopArgs),
    /// Seasonal anime
    Season(commands::seasons::SeasonArgs),
    /// Weekly broadcast schedule
    Schedule(commands::seasons::ScheduleArgs),
    /// A random anime, manga, character or person
    Random(commands::random::RandomArgs),
    /// User profile
    User(commands::user::UserArgs),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                "jikan=info"
                    .parse()
                    .unwrap_or_else(|_| tracing_subscriber::filter::LevelFilter::INFO.into()),
            ),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    if let Err(err) = run(&cli).await {
        match err
            .chain()
            .find_map(|cause| cause.downcast_ref::<jikan_api::Error>())
        {
            Some(api_err) => eprintln!("Error ({}): {:#}", api_err.status(), err),
            None => eprintln!("Error: {:#}", err),
        }
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<()> {
    let format = OutputFormat::parse(&cli.output);

    let config = ClientConfig::default()
        .with_base_url(&cli.base_url)
        .with_timeout(Duration::from_secs(cli.timeout_secs));
    let client = Client::with_config(config);

    match &cli.command {
        Commands::Anime(args) => commands::anime::run(args, &client, &format).await?,
        Commands::Manga(args) => commands::manga::run(args, &client, &format).await?,
        Commands::Top(args) => commands::top::run(args, &client, &format).await?,
        Commands::Season(args) => commands::seasons::run_season(args, &client, &format).await?,
        Commands::Schedule(args) => {
            commands::seasons::run_schedule(args, &client, &format).await?
        }
        Commands::Random(args) => commands::random::run(args, &client, &format).await?,
        Commands::User(args) => commands::user::run(args, &client, &format).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands};

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "jikan",
            "anime",
            "--search",
            "bebop",
            "--output",
            "json",
            "--timeout-secs",
            "5",
        ])
        .unwrap();
        assert_eq!(cli.output, "json");
        assert_eq!(cli.timeout_secs, 5);
        assert_eq!(cli.base_url, jikan_api::DEFAULT_BASE_URL);
        match cli.command {
            Commands::Anime(args) => assert_eq!(args.search.as_deref(), Some("bebop")),
            _ => panic!("expected anime subcommand"),
        }
    }

    #[test]
    fn test_random_rejects_unknown_kind() {
        assert!(Cli::try_parse_from(["jikan", "random", "studio"]).is_err());
        assert!(Cli::try_parse_from(["jikan", "random", "person"]).is_ok());
    }
}
