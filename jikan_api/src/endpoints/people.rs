use super::endpoint_facade;
use crate::{
    query::PersonQuery,
    types::{MalId, PaginatedResponse, Person, Picture, Response},
    Error,
};

endpoint_facade! {
    /// `/people` resource.
    PeopleEndpoints
}

impl PeopleEndpoints {
    pub async fn by_id(&self, id: MalId) -> Result<Response<Person>, Error> {
        self.transport.get_path(&format!("/people/{}", id)).await
    }

    pub async fn pictures(&self, id: MalId) -> Result<Response<Vec<Picture>>, Error> {
        self.transport
            .get_path(&format!("/people/{}/pictures", id))
            .await
    }

    pub async fn search(&self, query: &PersonQuery) -> Result<PaginatedResponse<Person>, Error> {
        self.transport.get("/people", query).await
    }
}
