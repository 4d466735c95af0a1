//! Genres, producers and magazines.

use serde::{Deserialize, Serialize};

use super::common::{Images, MalId, Timestamp, Title};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Genre {
    pub mal_id: MalId,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub count: u32,
}

/// Studio, licensor or producer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Producer {
    pub mal_id: MalId,
    pub url: String,
    /// Only present on older payloads; newer ones carry `titles`.
    pub name: Option<String>,
    #[serde(default)]
    pub titles: Vec<Title>,
    #[serde(default)]
    pub images: Images,
    #[serde(default)]
    pub favorites: u32,
    #[serde(default)]
    pub count: u32,
    pub established: Option<Timestamp>,
    pub about: Option<String>,
}

impl Producer {
    /// The `Default` title if present, else the legacy `name`.
    pub fn display_name(&self) -> Option<&str> {
        self.titles
            .iter()
            .find(|t| t.title_type == "Default")
            .map(|t| t.title.as_str())
            .or(self.name.as_deref())
    }
}

/// Manga serialization magazine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Magazine {
    pub mal_id: MalId,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub count: u32,
}
