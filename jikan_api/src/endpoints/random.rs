use super::endpoint_facade;
use crate::{
    types::{Anime, Character, Manga, Person, Response, User},
    Error,
};

endpoint_facade! {
    /// `/random` picks one entry of a kind.
    RandomEndpoints
}

impl RandomEndpoints {
    pub async fn anime(&self) -> Result<Response<Anime>, Error> {
        self.transport.get_path("/random/anime").await
    }

    pub async fn manga(&self) -> Result<Response<Manga>, Error> {
        self.transport.get_path("/random/manga").await
    }

    pub async fn character(&self) -> Result<Response<Character>, Error> {
        self.transport.get_path("/random/characters").await
    }

    pub async fn person(&self) -> Result<Response<Person>, Error> {
        self.transport.get_path("/random/people").await
    }

    pub async fn user(&self) -> Result<Response<User>, Error> {
        self.transport.get_path("/random/users").await
    }
}
