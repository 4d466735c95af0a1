use serde::{Deserialize, Serialize};

use super::common::{Images, MalEntry, MalId, Timestamp};

/// Club returned by `/clubs/{id}` and club searches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Club {
    pub mal_id: MalId,
    pub url: String,
    pub name: String,
    #[serde(default)]
    pub images: Images,
    #[serde(default)]
    pub members: u32,
    pub category: Option<String>,
    pub created: Option<Timestamp>,
    /// public, private or secret.
    pub access: Option<String>,
}

/// Member (or staff) of a club.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClubMember {
    pub username: String,
    pub url: String,
    #[serde(default)]
    pub images: Images,
}

pub type ClubStaff = ClubMember;

/// Payload of `/clubs/{id}/relations`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClubRelations {
    #[serde(default)]
    pub anime: Vec<MalEntry>,
    #[serde(default)]
    pub manga: Vec<MalEntry>,
    #[serde(default)]
    pub characters: Vec<MalEntry>,
}
