//! Building blocks embedded in several resource payloads.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// ISO 8601 timestamp as returned by the API (always with an offset).
pub type Timestamp = DateTime<FixedOffset>;

/// MyAnimeList numeric identifier.
pub type MalId = u32;

/// Image URLs for one format. Any size may be missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImageUrls {
    pub image_url: Option<String>,
    #[serde(default)]
    pub small_image_url: Option<String>,
    #[serde(default)]
    pub large_image_url: Option<String>,
}

/// The `images` object: JPG always, WebP usually.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Images {
    pub jpg: ImageUrls,
    #[serde(default)]
    pub webp: Option<ImageUrls>,
}

/// Entries of the `/pictures` endpoints share the `images` shape.
pub type Picture = Images;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Title {
    #[serde(rename = "type")]
    pub title_type: String,
    pub title: String,
}

/// Aired/published range.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DateRange {
    pub from: Option<Timestamp>,
    pub to: Option<Timestamp>,
    /// Human-readable form, e.g. `"Apr 3, 1998 to Apr 24, 1999"`.
    #[serde(default)]
    pub string: Option<String>,
}

/// Lightweight reference used for genres, studios, producers, authors,
/// relations and similar lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MalEntry {
    pub mal_id: MalId,
    #[serde(rename = "type")]
    pub entry_type: String,
    pub name: String,
    pub url: String,
}

/// Reference to an anime or manga entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryRef {
    pub mal_id: MalId,
    pub url: String,
    #[serde(default)]
    pub images: Images,
    pub title: String,
}

/// Reference to a character or person.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedRef {
    pub mal_id: MalId,
    pub url: String,
    #[serde(default)]
    pub images: Images,
    pub name: String,
}

pub type CharacterRef = NamedRef;
pub type PersonRef = NamedRef;

/// Reference to a MyAnimeList user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRef {
    pub username: String,
    pub url: String,
    #[serde(default)]
    pub images: Option<Images>,
}

/// Trailer thumbnails.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrailerImages {
    pub image_url: Option<String>,
    pub small_image_url: Option<String>,
    pub medium_image_url: Option<String>,
    pub large_image_url: Option<String>,
    pub maximum_image_url: Option<String>,
}

/// YouTube trailer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Trailer {
    pub youtube_id: Option<String>,
    pub url: Option<String>,
    pub embed_url: Option<String>,
    #[serde(default)]
    pub images: TrailerImages,
}

/// Per-score vote distribution line of the statistics endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreCount {
    pub score: u8,
    pub votes: u32,
    pub percentage: f64,
}

/// `/external` and `/streaming` links.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalLink {
    pub name: String,
    pub url: String,
}

/// `{ "moreinfo": ... }` payload of the `/moreinfo` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoreInfo {
    pub moreinfo: Option<String>,
}

/// News article attached to an anime or manga entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsArticle {
    pub mal_id: MalId,
    pub url: String,
    pub title: String,
    pub date: Timestamp,
    pub author_username: String,
    pub author_url: String,
    pub forum_url: String,
    #[serde(default)]
    pub images: Images,
    pub comments: u32,
    pub excerpt: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LastComment {
    pub url: String,
    pub author_username: String,
    pub author_url: String,
    pub date: Option<Timestamp>,
}

/// Forum topic attached to an anime or manga entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForumTopic {
    pub mal_id: MalId,
    pub url: String,
    pub title: String,
    pub date: Timestamp,
    pub author_username: String,
    pub author_url: String,
    pub comments: u32,
    pub last_comment: Option<LastComment>,
}

/// A group of related entries (sequel, adaptation, side story, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Relation {
    pub relation: String,
    pub entry: Vec<MalEntry>,
}

/// "If you liked X" recommendation attached to an entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryRecommendation {
    pub entry: EntryRef,
    pub url: String,
    pub votes: u32,
}
