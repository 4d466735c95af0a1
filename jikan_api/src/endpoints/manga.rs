//! `/manga` resource.

use super::{endpoint_facade, page_param};
use crate::{
    query::MangaQuery,
    types::{
        EntryRecommendation, ExternalLink, ForumTopic, MalId, Manga, MangaCharacter, MangaReview,
        MangaStatistics, MangaUserUpdate, MoreInfo, NewsArticle, PaginatedResponse, Picture,
        Relation, Response,
    },
    Error,
};

endpoint_facade! {
    /// Manga entries and their sub-resources.
    MangaEndpoints
}

impl MangaEndpoints {
    pub async fn by_id(&self, id: MalId) -> Result<Response<Manga>, Error> {
        self.transport.get_path(&format!("/manga/{}", id)).await
    }

    pub async fn characters(&self, id: MalId) -> Result<Response<Vec<MangaCharacter>>, Error> {
        self.transport
            .get_path(&format!("/manga/{}/characters", id))
            .await
    }

    pub async fn news(
        &self,
        id: MalId,
        page: Option<u32>,
    ) -> Result<PaginatedResponse<NewsArticle>, Error> {
        self.transport
            .get(&format!("/manga/{}/news", id), &page_param(page))
            .await
    }

    pub async fn forum(&self, id: MalId) -> Result<Response<Vec<ForumTopic>>, Error> {
        self.transport.get_path(&format!("/manga/{}/forum", id)).await
    }

    pub async fn pictures(&self, id: MalId) -> Result<Response<Vec<Picture>>, Error> {
        self.transport
            .get_path(&format!("/manga/{}/pictures", id))
            .await
    }

    pub async fn statistics(&self, id: MalId) -> Result<Response<MangaStatistics>, Error> {
        self.transport
            .get_path(&format!("/manga/{}/statistics", id))
            .await
    }

    pub async fn more_info(&self, id: MalId) -> Result<Response<MoreInfo>, Error> {
        self.transport
            .get_path(&format!("/manga/{}/moreinfo", id))
            .await
    }

    pub async fn recommendations(
        &self,
        id: MalId,
    ) -> Result<Response<Vec<EntryRecommendation>>, Error> {
        self.transport
            .get_path(&format!("/manga/{}/recommendations", id))
            .await
    }

    pub async fn user_updates(
        &self,
        id: MalId,
        page: Option<u32>,
    ) -> Result<PaginatedResponse<MangaUserUpdate>, Error> {
        self.transport
            .get(&format!("/manga/{}/userupdates", id), &page_param(page))
            .await
    }

    pub async fn reviews(
        &self,
        id: MalId,
        page: Option<u32>,
    ) -> Result<PaginatedResponse<MangaReview>, Error> {
        self.transport
            .get(&format!("/manga/{}/reviews", id), &page_param(page))
            .await
    }

    pub async fn relations(&self, id: MalId) -> Result<Response<Vec<Relation>>, Error> {
        self.transport
            .get_path(&format!("/manga/{}/relations", id))
            .await
    }

    pub async fn external(&self, id: MalId) -> Result<Response<Vec<ExternalLink>>, Error> {
        self.transport
            .get_path(&format!("/manga/{}/external", id))
            .await
    }

    pub async fn search(&self, query: &MangaQuery) -> Result<PaginatedResponse<Manga>, Error> {
        self.transport.get("/manga", query).await
    }
}
