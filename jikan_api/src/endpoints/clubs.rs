use super::{endpoint_facade, page_param};
use crate::{
    query::ClubQuery,
    types::{Club, ClubMember, ClubRelations, ClubStaff, MalId, PaginatedResponse, Response},
    Error,
};

endpoint_facade! {
    /// `/clubs` resource.
    ClubEndpoints
}

impl ClubEndpoints {
    pub async fn by_id(&self, id: MalId) -> Result<Response<Club>, Error> {
        self.transport.get_path(&format!("/clubs/{}", id)).await
    }

    pub async fn members(
        &self,
        id: MalId,
        page: Option<u32>,
    ) -> Result<PaginatedResponse<ClubMember>, Error> {
        self.transport
            .get(&format!("/clubs/{}/members", id), &page_param(page))
            .await
    }

    pub async fn staff(&self, id: MalId) -> Result<Response<Vec<ClubStaff>>, Error> {
        self.transport.get_path(&format!("/clubs/{}/staff", id)).await
    }

    pub async fn relations(&self, id: MalId) -> Result<Response<ClubRelations>, Error> {
        self.transport
            .get_path(&format!("/clubs/{}/relations", id))
            .await
    }

    pub async fn search(&self, query: &ClubQuery) -> Result<PaginatedResponse<Club>, Error> {
        self.transport.get("/clubs", query).await
    }
}
