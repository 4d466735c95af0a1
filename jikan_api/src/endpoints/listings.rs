//! Site-wide listings: top lists, recent reviews and recent recommendations.

use super::endpoint_facade;
use crate::{
    query::{RecommendationQuery, ReviewQuery, TopQuery},
    types::{
        AnimeReview, MangaReview, PaginatedResponse, Recommendation, TopAnime, TopCharacter,
        TopManga, TopPerson, TopReview,
    },
    Error,
};

endpoint_facade! {
    /// `/top` rankings.
    TopEndpoints
}

impl TopEndpoints {
    pub async fn anime(&self, query: &TopQuery) -> Result<PaginatedResponse<TopAnime>, Error> {
        self.transport.get("/top/anime", query).await
    }

    pub async fn manga(&self, query: &TopQuery) -> Result<PaginatedResponse<TopManga>, Error> {
        self.transport.get("/top/manga", query).await
    }

    pub async fn characters(
        &self,
        query: &TopQuery,
    ) -> Result<PaginatedResponse<TopCharacter>, Error> {
        self.transport.get("/top/characters", query).await
    }

    pub async fn people(&self, query: &TopQuery) -> Result<PaginatedResponse<TopPerson>, Error> {
        self.transport.get("/top/people", query).await
    }

    pub async fn reviews(&self, query: &TopQuery) -> Result<PaginatedResponse<TopReview>, Error> {
        self.transport.get("/top/reviews", query).await
    }
}

endpoint_facade! {
    /// Most recent reviews.
    ReviewEndpoints
}

impl ReviewEndpoints {
    pub async fn anime(
        &self,
        query: &ReviewQuery,
    ) -> Result<PaginatedResponse<AnimeReview>, Error> {
        self.transport.get("/reviews/anime", query).await
    }

    pub async fn manga(
        &self,
        query: &ReviewQuery,
    ) -> Result<PaginatedResponse<MangaReview>, Error> {
        self.transport.get("/reviews/manga", query).await
    }
}

endpoint_facade! {
    /// Most recent user recommendations.
    RecommendationEndpoints
}

impl RecommendationEndpoints {
    pub async fn anime(
        &self,
        query: &RecommendationQuery,
    ) -> Result<PaginatedResponse<Recommendation>, Error> {
        self.transport.get("/recommendations/anime", query).await
    }

    pub async fn manga(
        &self,
        query: &RecommendationQuery,
    ) -> Result<PaginatedResponse<Recommendation>, Error> {
        self.transport.get("/recommendations/manga", query).await
    }
}
