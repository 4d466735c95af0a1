//! Reviews. The same record is returned by the entry, user, top and
//! recent review listings; fields that only some of them carry are optional.

use serde::{Deserialize, Serialize};

use super::common::{EntryRef, MalId, Timestamp, UserRef};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Reactions {
    #[serde(default)]
    pub overall: u32,
    #[serde(default)]
    pub nice: u32,
    #[serde(default)]
    pub love_it: u32,
    #[serde(default)]
    pub funny: u32,
    #[serde(default)]
    pub confusing: u32,
    #[serde(default)]
    pub informative: u32,
    #[serde(default)]
    pub well_written: u32,
    #[serde(default)]
    pub creative: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub mal_id: MalId,
    pub url: String,
    /// `"anime"` or `"manga"`.
    #[serde(rename = "type")]
    pub review_type: Option<String>,
    #[serde(default)]
    pub reactions: Reactions,
    pub date: Timestamp,
    pub review: String,
    pub score: Option<u32>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_spoiler: bool,
    #[serde(default)]
    pub is_preliminary: bool,
    pub episodes_watched: Option<u32>,
    pub chapters_read: Option<u32>,
    /// Reviewed entry; absent on the per-entry listings.
    pub entry: Option<EntryRef>,
    /// Author; absent on the per-user listing.
    pub user: Option<UserRef>,
}

pub type AnimeReview = Review;
pub type MangaReview = Review;
pub type UserReview = Review;
