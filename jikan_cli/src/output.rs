use std::fmt::Display;

use anyhow::Result;
use jikan_api::types::{Anime, Character, Manga, Person, Timestamp, User, UserProfile};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug, PartialEq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

impl OutputFormat {
    /// Unknown values fall back to a plain table.
    pub fn parse(value: &str) -> Self {
        match value {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            "markdown" | "md" => OutputFormat::Markdown,
            _ => OutputFormat::Table,
        }
    }
}

#[derive(Tabled, Serialize)]
pub struct AnimeRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: u32,
    #[tabled(rename = "Title")]
    #[serde(rename = "Title")]
    title: String,
    #[tabled(rename = "Type")]
    #[serde(rename = "Type")]
    kind: String,
    #[tabled(rename = "Episodes")]
    #[serde(rename = "Episodes")]
    episodes: String,
    #[tabled(rename = "Score")]
    #[serde(rename = "Score")]
    score: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
    #[tabled(rename = "Season")]
    #[serde(rename = "Season")]
    season: String,
}

#[derive(Tabled, Serialize)]
pub struct MangaRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: u32,
    #[tabled(rename = "Title")]
    #[serde(rename = "Title")]
    title: String,
    #[tabled(rename = "Type")]
    #[serde(rename = "Type")]
    kind: String,
    #[tabled(rename = "Chapters")]
    #[serde(rename = "Chapters")]
    chapters: String,
    #[tabled(rename = "Volumes")]
    #[serde(rename = "Volumes")]
    volumes: String,
    #[tabled(rename = "Score")]
    #[serde(rename = "Score")]
    score: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
}

#[derive(Tabled, Serialize)]
pub struct CharacterRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: u32,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Kanji")]
    #[serde(rename = "Kanji")]
    kanji: String,
    #[tabled(rename = "Favorites")]
    #[serde(rename = "Favorites")]
    favorites: u32,
}

#[derive(Tabled, Serialize)]
pub struct PersonRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: u32,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Birthday")]
    #[serde(rename = "Birthday")]
    birthday: String,
    #[tabled(rename = "Favorites")]
    #[serde(rename = "Favorites")]
    favorites: u32,
}

#[derive(Tabled, Serialize)]
pub struct UserRow {
    #[tabled(rename = "Username")]
    #[serde(rename = "Username")]
    username: String,
    #[tabled(rename = "Gender")]
    #[serde(rename = "Gender")]
    gender: String,
    #[tabled(rename = "Location")]
    #[serde(rename = "Location")]
    location: String,
    #[tabled(rename = "Joined")]
    #[serde(rename = "Joined")]
    joined: String,
    #[tabled(rename = "Last Online")]
    #[serde(rename = "Last Online")]
    last_online: String,
    #[tabled(rename = "Anime Done")]
    #[serde(rename = "Anime Done")]
    anime_completed: String,
    #[tabled(rename = "Manga Done")]
    #[serde(rename = "Manga Done")]
    manga_completed: String,
}

// -- Row builders --

pub fn build_anime_rows(anime: &[Anime]) -> Vec<AnimeRow> {
    anime
        .iter()
        .map(|a| AnimeRow {
            id: a.mal_id,
            title: a.title.clone(),
            kind: or_dash(a.anime_type.as_ref()),
            episodes: or_dash(a.episodes),
            score: format_score(a.score),
            status: or_dash(a.status.as_ref()),
            season: match (&a.season, a.year) {
                (Some(season), Some(year)) => format!("{} {}", season, year),
                (None, Some(year)) => year.to_string(),
                _ => "-".to_string(),
            },
        })
        .collect()
}

pub fn build_manga_rows(manga: &[Manga]) -> Vec<MangaRow> {
    manga
        .iter()
        .map(|m| MangaRow {
            id: m.mal_id,
            title: m.title.clone(),
            kind: or_dash(m.manga_type.as_ref()),
            chapters: or_dash(m.chapters),
            volumes: or_dash(m.volumes),
            score: format_score(m.score),
            status: or_dash(m.status.as_ref()),
        })
        .collect()
}

pub fn build_character_rows(characters: &[Character]) -> Vec<CharacterRow> {
    characters
        .iter()
        .map(|c| CharacterRow {
            id: c.mal_id,
            name: c.name.clone(),
            kanji: or_dash(c.name_kanji.as_ref()),
            favorites: c.favorites,
        })
        .collect()
}

pub fn build_person_rows(people: &[Person]) -> Vec<PersonRow> {
    people
        .iter()
        .map(|p| PersonRow {
            id: p.mal_id,
            name: p.name.clone(),
            birthday: format_date(p.birthday.as_ref()),
            favorites: p.favorites,
        })
        .collect()
}

pub fn build_user_rows(profiles: &[UserProfile]) -> Vec<UserRow> {
    profiles
        .iter()
        .map(|p| {
            let mut row = user_row(&p.user);
            if let Some(stats) = &p.statistics {
                row.anime_completed = stats.anime.completed.to_string();
                row.manga_completed = stats.manga.completed.to_string();
            }
            row
        })
        .collect()
}

fn user_row(user: &User) -> UserRow {
    UserRow {
        username: user.username.clone(),
        gender: or_dash(user.gender.as_ref()),
        location: or_dash(user.location.as_ref()),
        joined: format_date(user.joined.as_ref()),
        last_online: format_date(user.last_online.as_ref()),
        anime_completed: "-".to_string(),
        manga_completed: "-".to_string(),
    }
}

// -- Rendering --

/// Prints rows as a table, a markdown table, CSV or JSON.
pub fn print_rows<R: Tabled + Serialize>(rows: Vec<R>, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", Table::new(rows)),
        OutputFormat::Markdown => {
            let mut table = Table::new(rows);
            table.with(Style::markdown());
            println!("{}", table);
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            for row in rows {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        }
        OutputFormat::Json => print_json(&rows),
    }
    Ok(())
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

fn or_dash<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn format_score(score: Option<f64>) -> String {
    score.map_or_else(|| "-".to_string(), |s| format!("{:.2}", s))
}

fn format_date(date: Option<&Timestamp>) -> String {
    date.map_or_else(
        || "-".to_string(),
        |d| d.date_naive().format("%Y-%m-%d").to_string(),
    )
}
