//! MyAnimeList user profiles and their sub-resources.

use serde::{Deserialize, Serialize};

use super::anime::Anime;
use super::common::{EntryRef, ExternalLink, Images, MalEntry, MalId, NamedRef, Timestamp};
use super::manga::Manga;
use super::recommendations::Recommendation;

/// Basic profile returned by `/users/{username}`, user search and
/// `/random/users`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Missing on some search results.
    pub mal_id: Option<MalId>,
    pub username: String,
    pub url: String,
    #[serde(default)]
    pub images: Images,
    pub last_online: Option<Timestamp>,
    pub gender: Option<String>,
    pub birthday: Option<Timestamp>,
    pub location: Option<String>,
    pub joined: Option<Timestamp>,
}

/// Full profile returned by `/users/{username}/full`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(flatten)]
    pub user: User,
    pub statistics: Option<UserStatistics>,
    #[serde(default)]
    pub external: Vec<ExternalLink>,
    pub favorites: Option<UserFavorites>,
    pub updates: Option<UserUpdates>,
    pub about: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAnimeStatistics {
    pub days_watched: f64,
    pub mean_score: f64,
    pub watching: u32,
    pub completed: u32,
    pub on_hold: u32,
    pub dropped: u32,
    pub plan_to_watch: u32,
    pub total_entries: u32,
    pub rewatched: u32,
    pub episodes_watched: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserMangaStatistics {
    pub days_read: f64,
    pub mean_score: f64,
    pub reading: u32,
    pub completed: u32,
    pub on_hold: u32,
    pub dropped: u32,
    pub plan_to_read: u32,
    pub total_entries: u32,
    pub reread: u32,
    pub chapters_read: u32,
    pub volumes_read: u32,
}

/// Payload of `/users/{username}/statistics`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserStatistics {
    pub anime: UserAnimeStatistics,
    pub manga: UserMangaStatistics,
}

/// Favorited anime or manga.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteEntry {
    pub mal_id: MalId,
    pub url: String,
    #[serde(default)]
    pub images: Images,
    pub title: String,
    #[serde(rename = "type")]
    pub entry_type: Option<String>,
    pub start_year: Option<u32>,
}

/// Payload of `/users/{username}/favorites`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserFavorites {
    #[serde(default)]
    pub anime: Vec<FavoriteEntry>,
    #[serde(default)]
    pub manga: Vec<FavoriteEntry>,
    #[serde(default)]
    pub characters: Vec<NamedRef>,
    #[serde(default)]
    pub people: Vec<NamedRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimeListUpdate {
    pub entry: EntryRef,
    pub score: Option<u32>,
    pub status: String,
    pub episodes_seen: Option<u32>,
    pub episodes_total: Option<u32>,
    pub date: Timestamp,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MangaListUpdate {
    pub entry: EntryRef,
    pub score: Option<u32>,
    pub status: String,
    pub chapters_read: Option<u32>,
    pub chapters_total: Option<u32>,
    pub volumes_read: Option<u32>,
    pub volumes_total: Option<u32>,
    pub date: Timestamp,
}

/// Payload of `/users/{username}/userupdates`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserUpdates {
    #[serde(default)]
    pub anime: Vec<AnimeListUpdate>,
    #[serde(default)]
    pub manga: Vec<MangaListUpdate>,
}

/// Payload of `/users/{username}/about`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAbout {
    pub about: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserHistory {
    pub entry: MalEntry,
    pub increment: u32,
    pub date: Timestamp,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FriendRef {
    pub username: String,
    pub url: String,
    #[serde(default)]
    pub images: Images,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserFriend {
    pub user: FriendRef,
    pub last_online: Option<Timestamp>,
    pub friends_since: Option<Timestamp>,
}

pub type UserRecommendation = Recommendation;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserClub {
    pub mal_id: MalId,
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimeListEntryStatus {
    pub status: String,
    pub score: u32,
    pub num_episodes_watched: u32,
    #[serde(default)]
    pub is_rewatching: bool,
    pub updated_at: Option<Timestamp>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAnimeListEntry {
    pub node: Anime,
    pub list_status: AnimeListEntryStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MangaListEntryStatus {
    pub status: String,
    pub score: u32,
    pub num_chapters_read: u32,
    pub num_volumes_read: u32,
    #[serde(default)]
    pub is_rereading: bool,
    pub updated_at: Option<Timestamp>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserMangaListEntry {
    pub node: Manga,
    pub list_status: MangaListEntryStatus,
}
