//! Typed async client for the Jikan v4 REST API, an unofficial
//! MyAnimeList mirror.

mod client;
mod config;
mod endpoints;
mod errors;
pub mod query;
mod transport;
pub mod types;

pub use self::client::Client;
pub use self::config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use self::endpoints::{
    AnimeEndpoints, CharacterEndpoints, ClubEndpoints, GenreEndpoints, MagazineEndpoints,
    MangaEndpoints, PeopleEndpoints, ProducerEndpoints, RandomEndpoints, RecommendationEndpoints,
    ReviewEndpoints, ScheduleEndpoints, SeasonEndpoints, TopEndpoints, UserEndpoints,
};
pub use self::errors::{Error, FAULT_STATUS, TIMEOUT_STATUS};
pub use self::query::{
    AnimeQuery, CharacterQuery, ClubQuery, GenreQuery, MagazineQuery, MangaQuery, PageQuery,
    PagedQuery, PersonQuery, ProducerQuery, Query, QueryParams, ScheduleQuery, SeasonQuery,
    SortDirection, TopQuery, UserQuery,
};
