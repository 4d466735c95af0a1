use serde::{Deserialize, Serialize};

use super::anime::Anime;

/// One year of `/seasons`: the seasons available for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonArchive {
    pub year: u32,
    pub seasons: Vec<String>,
}

/// Seasonal and schedule listings carry plain anime entries.
pub type SeasonalAnime = Anime;
