//! The `/top/*` listings reuse the resource records.

pub use super::anime::Anime as TopAnime;
pub use super::manga::Manga as TopManga;
pub use super::people::{Character as TopCharacter, Person as TopPerson};
pub use super::reviews::Review as TopReview;
