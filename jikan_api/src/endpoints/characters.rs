use super::endpoint_facade;
use crate::{
    query::CharacterQuery,
    types::{Character, MalId, PaginatedResponse, Picture, Response},
    Error,
};

endpoint_facade! {
    /// `/characters` resource.
    CharacterEndpoints
}

impl CharacterEndpoints {
    pub async fn by_id(&self, id: MalId) -> Result<Response<Character>, Error> {
        self.transport.get_path(&format!("/characters/{}", id)).await
    }

    pub async fn pictures(&self, id: MalId) -> Result<Response<Vec<Picture>>, Error> {
        self.transport
            .get_path(&format!("/characters/{}/pictures", id))
            .await
    }

    pub async fn search(
        &self,
        query: &CharacterQuery,
    ) -> Result<PaginatedResponse<Character>, Error> {
        self.transport.get("/characters", query).await
    }
}
