//! Genres, producers and magazines.

use super::endpoint_facade;
use crate::{
    query::{GenreQuery, MagazineQuery, PageQuery, ProducerQuery},
    types::{Genre, Magazine, MalId, PaginatedResponse, Producer, Response},
    Error,
};

endpoint_facade! {
    /// `/genres` resource.
    GenreEndpoints
}

impl GenreEndpoints {
    pub async fn anime(&self, query: &GenreQuery) -> Result<Response<Vec<Genre>>, Error> {
        self.transport.get("/genres/anime", query).await
    }

    pub async fn manga(&self, query: &GenreQuery) -> Result<Response<Vec<Genre>>, Error> {
        self.transport.get("/genres/manga", query).await
    }
}

endpoint_facade! {
    /// `/producers` resource.
    ProducerEndpoints
}

impl ProducerEndpoints {
    /// `page`/`limit` are forwarded as given even though the resource is a
    /// single record.
    pub async fn by_id(&self, id: MalId, paging: &PageQuery) -> Result<Response<Producer>, Error> {
        self.transport
            .get(&format!("/producers/{}", id), paging)
            .await
    }

    pub async fn all(&self, query: &ProducerQuery) -> Result<PaginatedResponse<Producer>, Error> {
        self.transport.get("/producers", query).await
    }
}

endpoint_facade! {
    /// `/magazines` resource.
    MagazineEndpoints
}

impl MagazineEndpoints {
    pub async fn by_id(&self, id: MalId, paging: &PageQuery) -> Result<Response<Magazine>, Error> {
        self.transport
            .get(&format!("/magazines/{}", id), paging)
            .await
    }

    pub async fn all(&self, query: &MagazineQuery) -> Result<PaginatedResponse<Magazine>, Error> {
        self.transport.get("/magazines", query).await
    }
}
