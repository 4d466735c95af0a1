//! `/users` resource. Usernames are inserted into the path as given.

use super::endpoint_facade;
use crate::{
    query::{HistoryType, PageQuery, QueryParams, UserAnimeListQuery, UserMangaListQuery, UserQuery},
    types::{
        PaginatedResponse, Response, User, UserAbout, UserAnimeListEntry, UserClub,
        UserFavorites, UserFriend, UserHistory, UserMangaListEntry, UserProfile,
        UserRecommendation, UserReview, UserStatistics, UserUpdates,
    },
    Error,
};

endpoint_facade! {
    UserEndpoints
}

impl UserEndpoints {
    pub async fn by_username(&self, username: &str) -> Result<Response<User>, Error> {
        self.transport
            .get_path(&format!("/users/{}", username))
            .await
    }

    pub async fn profile(&self, username: &str) -> Result<Response<UserProfile>, Error> {
        self.transport
            .get_path(&format!("/users/{}/full", username))
            .await
    }

    pub async fn statistics(&self, username: &str) -> Result<Response<UserStatistics>, Error> {
        self.transport
            .get_path(&format!("/users/{}/statistics", username))
            .await
    }

    pub async fn favorites(&self, username: &str) -> Result<Response<UserFavorites>, Error> {
        self.transport
            .get_path(&format!("/users/{}/favorites", username))
            .await
    }

    pub async fn updates(&self, username: &str) -> Result<Response<UserUpdates>, Error> {
        self.transport
            .get_path(&format!("/users/{}/userupdates", username))
            .await
    }

    pub async fn about(&self, username: &str) -> Result<Response<UserAbout>, Error> {
        self.transport
            .get_path(&format!("/users/{}/about", username))
            .await
    }

    pub async fn history(
        &self,
        username: &str,
        history_type: Option<HistoryType>,
    ) -> Result<Response<Vec<UserHistory>>, Error> {
        self.transport
            .get(
                &format!("/users/{}/history", username),
                &QueryParams::new().with("type", history_type),
            )
            .await
    }

    pub async fn friends(
        &self,
        username: &str,
        paging: &PageQuery,
    ) -> Result<PaginatedResponse<UserFriend>, Error> {
        self.transport
            .get(&format!("/users/{}/friends", username), paging)
            .await
    }

    pub async fn reviews(
        &self,
        username: &str,
        paging: &PageQuery,
    ) -> Result<PaginatedResponse<UserReview>, Error> {
        self.transport
            .get(&format!("/users/{}/reviews", username), paging)
            .await
    }

    pub async fn recommendations(
        &self,
        username: &str,
        paging: &PageQuery,
    ) -> Result<PaginatedResponse<UserRecommendation>, Error> {
        self.transport
            .get(&format!("/users/{}/recommendations", username), paging)
            .await
    }

    pub async fn clubs(
        &self,
        username: &str,
        paging: &PageQuery,
    ) -> Result<PaginatedResponse<UserClub>, Error> {
        self.transport
            .get(&format!("/users/{}/clubs", username), paging)
            .await
    }

    pub async fn anime_list(
        &self,
        username: &str,
        query: &UserAnimeListQuery,
    ) -> Result<PaginatedResponse<UserAnimeListEntry>, Error> {
        self.transport
            .get(&format!("/users/{}/animelist", username), query)
            .await
    }

    pub async fn manga_list(
        &self,
        username: &str,
        query: &UserMangaListQuery,
    ) -> Result<PaginatedResponse<UserMangaListEntry>, Error> {
        self.transport
            .get(&format!("/users/{}/mangalist", username), query)
            .await
    }

    pub async fn search(&self, query: &UserQuery) -> Result<PaginatedResponse<User>, Error> {
        self.transport.get("/users", query).await
    }
}
