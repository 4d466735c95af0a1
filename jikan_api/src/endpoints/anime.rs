//! `/anime` resource.

use super::{endpoint_facade, page_param};
use crate::{
    query::{AnimeQuery, ForumFilter, QueryParams},
    types::{
        Anime, AnimeCharacter, AnimeEpisode, AnimeReview, AnimeStaff, AnimeStatistics,
        AnimeThemes, AnimeUserUpdate, AnimeVideos, EntryRecommendation, ExternalLink, ForumTopic,
        MalId, MoreInfo, NewsArticle, PaginatedResponse, Picture, Relation, Response,
    },
    Error,
};

endpoint_facade! {
    /// Anime entries and their sub-resources.
    AnimeEndpoints
}

impl AnimeEndpoints {
    pub async fn by_id(&self, id: MalId) -> Result<Response<Anime>, Error> {
        self.transport.get_path(&format!("/anime/{}", id)).await
    }

    pub async fn characters(&self, id: MalId) -> Result<Response<Vec<AnimeCharacter>>, Error> {
        self.transport
            .get_path(&format!("/anime/{}/characters", id))
            .await
    }

    pub async fn staff(&self, id: MalId) -> Result<Response<Vec<AnimeStaff>>, Error> {
        self.transport.get_path(&format!("/anime/{}/staff", id)).await
    }

    /// Episode list, 100 per page.
    pub async fn episodes(
        &self,
        id: MalId,
        page: Option<u32>,
    ) -> Result<PaginatedResponse<AnimeEpisode>, Error> {
        self.transport
            .get(&format!("/anime/{}/episodes", id), &page_param(page))
            .await
    }

    pub async fn episode_by_id(
        &self,
        id: MalId,
        episode: u32,
    ) -> Result<Response<AnimeEpisode>, Error> {
        self.transport
            .get_path(&format!("/anime/{}/episodes/{}", id, episode))
            .await
    }

    pub async fn news(
        &self,
        id: MalId,
        page: Option<u32>,
    ) -> Result<PaginatedResponse<NewsArticle>, Error> {
        self.transport
            .get(&format!("/anime/{}/news", id), &page_param(page))
            .await
    }

    pub async fn forum(
        &self,
        id: MalId,
        filter: Option<ForumFilter>,
    ) -> Result<Response<Vec<ForumTopic>>, Error> {
        self.transport
            .get(
                &format!("/anime/{}/forum", id),
                &QueryParams::new().with("filter", filter),
            )
            .await
    }

    pub async fn videos(&self, id: MalId) -> Result<Response<AnimeVideos>, Error> {
        self.transport.get_path(&format!("/anime/{}/videos", id)).await
    }

    pub async fn pictures(&self, id: MalId) -> Result<Response<Vec<Picture>>, Error> {
        self.transport
            .get_path(&format!("/anime/{}/pictures", id))
            .await
    }

    pub async fn statistics(&self, id: MalId) -> Result<Response<AnimeStatistics>, Error> {
        self.transport
            .get_path(&format!("/anime/{}/statistics", id))
            .await
    }

    pub async fn more_info(&self, id: MalId) -> Result<Response<MoreInfo>, Error> {
        self.transport
            .get_path(&format!("/anime/{}/moreinfo", id))
            .await
    }

    pub async fn recommendations(
        &self,
        id: MalId,
    ) -> Result<Response<Vec<EntryRecommendation>>, Error> {
        self.transport
            .get_path(&format!("/anime/{}/recommendations", id))
            .await
    }

    pub async fn user_updates(
        &self,
        id: MalId,
        page: Option<u32>,
    ) -> Result<PaginatedResponse<AnimeUserUpdate>, Error> {
        self.transport
            .get(&format!("/anime/{}/userupdates", id), &page_param(page))
            .await
    }

    pub async fn reviews(
        &self,
        id: MalId,
        page: Option<u32>,
    ) -> Result<PaginatedResponse<AnimeReview>, Error> {
        self.transport
            .get(&format!("/anime/{}/reviews", id), &page_param(page))
            .await
    }

    pub async fn relations(&self, id: MalId) -> Result<Response<Vec<Relation>>, Error> {
        self.transport
            .get_path(&format!("/anime/{}/relations", id))
            .await
    }

    pub async fn themes(&self, id: MalId) -> Result<Response<AnimeThemes>, Error> {
        self.transport.get_path(&format!("/anime/{}/themes", id)).await
    }

    pub async fn external(&self, id: MalId) -> Result<Response<Vec<ExternalLink>>, Error> {
        self.transport
            .get_path(&format!("/anime/{}/external", id))
            .await
    }

    pub async fn streaming(&self, id: MalId) -> Result<Response<Vec<ExternalLink>>, Error> {
        self.transport
            .get_path(&format!("/anime/{}/streaming", id))
            .await
    }

    /// Searches `/anime`. An empty query lists everything.
    pub async fn search(&self, query: &AnimeQuery) -> Result<PaginatedResponse<Anime>, Error> {
        self.transport.get("/anime", query).await
    }
}
