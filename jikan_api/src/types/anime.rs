//! Anime entries and the payloads of the `/anime/{id}/*` sub-resources.

use serde::{Deserialize, Serialize};

use super::common::{
    CharacterRef, DateRange, Images, MalEntry, MalId, PersonRef, ScoreCount, Timestamp, Title,
    Trailer, UserRef,
};

/// Anime entry returned by `/anime/{id}`, searches, seasons, schedules and
/// the top list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Anime {
    pub mal_id: MalId,
    pub url: String,
    #[serde(default)]
    pub images: Images,
    #[serde(default)]
    pub trailer: Option<Trailer>,
    #[serde(default)]
    pub approved: bool,
    #[serde(default)]
    pub titles: Vec<Title>,
    /// Default (romanized) title.
    pub title: String,
    pub title_english: Option<String>,
    pub title_japanese: Option<String>,
    #[serde(default)]
    pub title_synonyms: Vec<String>,
    /// TV, Movie, OVA, ...
    #[serde(rename = "type")]
    pub anime_type: Option<String>,
    pub source: Option<String>,
    pub episodes: Option<u32>,
    pub status: Option<String>,
    #[serde(default)]
    pub airing: bool,
    #[serde(default)]
    pub aired: DateRange,
    pub duration: Option<String>,
    pub rating: Option<String>,
    pub score: Option<f64>,
    pub scored_by: Option<u32>,
    pub rank: Option<u32>,
    pub popularity: Option<u32>,
    pub members: Option<u32>,
    pub favorites: Option<u32>,
    pub synopsis: Option<String>,
    pub background: Option<String>,
    pub season: Option<String>,
    pub year: Option<u32>,
    #[serde(default)]
    pub broadcast: Option<Broadcast>,
    #[serde(default)]
    pub producers: Vec<MalEntry>,
    #[serde(default)]
    pub licensors: Vec<MalEntry>,
    #[serde(default)]
    pub studios: Vec<MalEntry>,
    #[serde(default)]
    pub genres: Vec<MalEntry>,
    #[serde(default)]
    pub explicit_genres: Vec<MalEntry>,
    #[serde(default)]
    pub themes: Vec<MalEntry>,
    #[serde(default)]
    pub demographics: Vec<MalEntry>,
}

/// Weekly broadcast slot (JST).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Broadcast {
    pub day: Option<String>,
    pub time: Option<String>,
    pub timezone: Option<String>,
    pub string: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceActor {
    pub person: PersonRef,
    pub language: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimeCharacter {
    pub character: CharacterRef,
    pub role: String,
    #[serde(default)]
    pub favorites: u32,
    #[serde(default)]
    pub voice_actors: Vec<VoiceActor>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimeStaff {
    pub person: PersonRef,
    pub positions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimeEpisode {
    pub mal_id: MalId,
    pub url: Option<String>,
    pub title: Option<String>,
    pub title_japanese: Option<String>,
    pub title_romanji: Option<String>,
    /// Length in seconds.
    pub duration: Option<u32>,
    pub aired: Option<Timestamp>,
    #[serde(default)]
    pub filler: bool,
    #[serde(default)]
    pub recap: bool,
    pub forum_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Promo {
    pub title: String,
    pub trailer: Trailer,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpisodeVideo {
    pub mal_id: MalId,
    pub url: Option<String>,
    pub title: Option<String>,
    pub episode: Option<String>,
    #[serde(default)]
    pub images: Images,
}

/// Payload of `/anime/{id}/videos`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimeVideos {
    #[serde(default)]
    pub promo: Vec<Promo>,
    #[serde(default)]
    pub episodes: Vec<EpisodeVideo>,
}

/// Payload of `/anime/{id}/statistics`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimeStatistics {
    pub watching: u32,
    pub completed: u32,
    pub on_hold: u32,
    pub dropped: u32,
    pub plan_to_watch: u32,
    pub total: u32,
    #[serde(default)]
    pub scores: Vec<ScoreCount>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimeUserUpdate {
    pub user: UserRef,
    pub status: String,
    pub score: Option<u32>,
    pub episodes_seen: Option<u32>,
    pub episodes_total: Option<u32>,
    pub date: Timestamp,
}

/// Payload of `/anime/{id}/themes`: opening and ending song credits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimeThemes {
    #[serde(default)]
    pub openings: Vec<String>,
    #[serde(default)]
    pub endings: Vec<String>,
}
