//! Manga entries and the payloads of the `/manga/{id}/*` sub-resources.

use serde::{Deserialize, Serialize};

use super::common::{CharacterRef, DateRange, Images, MalEntry, MalId, ScoreCount, Timestamp, Title, UserRef};

/// Manga entry returned by `/manga/{id}`, searches and the top list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manga {
    pub mal_id: MalId,
    pub url: String,
    #[serde(default)]
    pub images: Images,
    #[serde(default)]
    pub approved: bool,
    #[serde(default)]
    pub titles: Vec<Title>,
    pub title: String,
    pub title_english: Option<String>,
    pub title_japanese: Option<String>,
    #[serde(default)]
    pub title_synonyms: Vec<String>,
    /// Manga, Novel, Manhwa, ...
    #[serde(rename = "type")]
    pub manga_type: Option<String>,
    pub chapters: Option<u32>,
    pub volumes: Option<u32>,
    pub status: Option<String>,
    #[serde(default)]
    pub publishing: bool,
    #[serde(default)]
    pub published: DateRange,
    pub score: Option<f64>,
    pub scored_by: Option<u32>,
    pub rank: Option<u32>,
    pub popularity: Option<u32>,
    pub members: Option<u32>,
    pub favorites: Option<u32>,
    pub synopsis: Option<String>,
    pub background: Option<String>,
    #[serde(default)]
    pub authors: Vec<MalEntry>,
    #[serde(default)]
    pub serializations: Vec<MalEntry>,
    #[serde(default)]
    pub genres: Vec<MalEntry>,
    #[serde(default)]
    pub explicit_genres: Vec<MalEntry>,
    #[serde(default)]
    pub themes: Vec<MalEntry>,
    #[serde(default)]
    pub demographics: Vec<MalEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MangaCharacter {
    pub character: CharacterRef,
    pub role: String,
}

/// Payload of `/manga/{id}/statistics`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MangaStatistics {
    pub reading: u32,
    pub completed: u32,
    pub on_hold: u32,
    pub dropped: u32,
    pub plan_to_read: u32,
    pub total: u32,
    #[serde(default)]
    pub scores: Vec<ScoreCount>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MangaUserUpdate {
    pub user: UserRef,
    pub status: String,
    pub score: Option<u32>,
    pub chapters_read: Option<u32>,
    pub chapters_total: Option<u32>,
    pub volumes_read: Option<u32>,
    pub volumes_total: Option<u32>,
    pub date: Timestamp,
}
