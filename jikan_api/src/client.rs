//! Entry point of the library.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::{
    config::ClientConfig,
    endpoints::{
        AnimeEndpoints, CharacterEndpoints, ClubEndpoints, GenreEndpoints, MagazineEndpoints,
        MangaEndpoints, PeopleEndpoints, ProducerEndpoints, RandomEndpoints,
        RecommendationEndpoints, ReviewEndpoints, ScheduleEndpoints, SeasonEndpoints,
        TopEndpoints, UserEndpoints,
    },
    query::Query,
    transport::Transport,
    Error,
};

/// Client for the Jikan v4 REST API.
///
/// Each resource group is reachable through a public field:
///
/// ```no_run
/// # async fn run() -> Result<(), jikan_api::Error> {
/// let client = jikan_api::Client::new();
/// let anime = client.anime.by_id(1).await?;
/// println!("{}", anime.data.title);
/// # Ok(())
/// # }
/// ```
///
/// Cloning is cheap; clones share the configuration and connection pool.
/// The client applies no rate limiting, retries or caching.
#[derive(Clone, Debug)]
pub struct Client {
    transport: Arc<Transport>,
    pub anime: AnimeEndpoints,
    pub manga: MangaEndpoints,
    pub characters: CharacterEndpoints,
    pub people: PeopleEndpoints,
    pub clubs: ClubEndpoints,
    pub seasons: SeasonEndpoints,
    pub schedules: ScheduleEndpoints,
    pub top: TopEndpoints,
    pub genres: GenreEndpoints,
    pub producers: ProducerEndpoints,
    pub magazines: MagazineEndpoints,
    pub users: UserEndpoints,
    pub reviews: ReviewEndpoints,
    pub recommendations: RecommendationEndpoints,
    pub random: RandomEndpoints,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a client for the public API with the default configuration.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self::with_config(ClientConfig::default().with_base_url(base_url))
    }

    pub fn with_config(config: ClientConfig) -> Self {
        let transport = Arc::new(Transport::new(config));
        Self {
            anime: AnimeEndpoints::new(transport.clone()),
            manga: MangaEndpoints::new(transport.clone()),
            characters: CharacterEndpoints::new(transport.clone()),
            people: PeopleEndpoints::new(transport.clone()),
            clubs: ClubEndpoints::new(transport.clone()),
            seasons: SeasonEndpoints::new(transport.clone()),
            schedules: ScheduleEndpoints::new(transport.clone()),
            top: TopEndpoints::new(transport.clone()),
            genres: GenreEndpoints::new(transport.clone()),
            producers: ProducerEndpoints::new(transport.clone()),
            magazines: MagazineEndpoints::new(transport.clone()),
            users: UserEndpoints::new(transport.clone()),
            reviews: ReviewEndpoints::new(transport.clone()),
            recommendations: RecommendationEndpoints::new(transport.clone()),
            random: RandomEndpoints::new(transport.clone()),
            transport,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        self.transport.config()
    }

    /// Issues a GET for any path under the base URL.
    ///
    /// Decoding into [`serde_json::Value`] returns the body without any
    /// shape check.
    pub async fn request<T, Q>(&self, path: &str, query: &Q) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query + ?Sized,
    {
        self.transport.get(path, query).await
    }
}
