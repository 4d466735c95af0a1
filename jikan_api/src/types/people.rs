//! Characters and people (voice actors, staff, authors).

use serde::{Deserialize, Serialize};

use super::common::{CharacterRef, EntryRef, Images, MalId, PersonRef, Timestamp};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterAnimeRole {
    pub role: String,
    pub anime: EntryRef,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterMangaRole {
    pub role: String,
    pub manga: EntryRef,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterVoice {
    pub language: String,
    pub person: PersonRef,
}

/// Character returned by `/characters/{id}`, searches and the top list.
///
/// The appearance lists are only filled by the full variant of the
/// resource; they are empty otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    pub mal_id: MalId,
    pub url: String,
    #[serde(default)]
    pub images: Images,
    pub name: String,
    pub name_kanji: Option<String>,
    #[serde(default)]
    pub nicknames: Vec<String>,
    #[serde(default)]
    pub favorites: u32,
    pub about: Option<String>,
    #[serde(default, alias = "anime")]
    pub animeography: Vec<CharacterAnimeRole>,
    #[serde(default, alias = "manga")]
    pub mangaography: Vec<CharacterMangaRole>,
    #[serde(default)]
    pub voices: Vec<CharacterVoice>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonAnimePosition {
    pub position: String,
    pub anime: EntryRef,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonMangaPosition {
    pub position: String,
    pub manga: EntryRef,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonVoiceRole {
    pub role: String,
    pub anime: EntryRef,
    pub character: CharacterRef,
}

/// Person returned by `/people/{id}`, searches and the top list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub mal_id: MalId,
    pub url: String,
    #[serde(default)]
    pub images: Images,
    pub name: String,
    pub given_name: Option<String>,
    pub family_name: Option<String>,
    #[serde(default)]
    pub alternate_names: Vec<String>,
    pub birthday: Option<Timestamp>,
    #[serde(default)]
    pub favorites: u32,
    pub about: Option<String>,
    #[serde(default)]
    pub anime: Vec<PersonAnimePosition>,
    #[serde(default)]
    pub manga: Vec<PersonMangaPosition>,
    #[serde(default)]
    pub voices: Vec<PersonVoiceRole>,
}
