use super::endpoint_facade;
use crate::{
    query::{ScheduleQuery, Season, SeasonQuery},
    types::{PaginatedResponse, Response, SeasonArchive, SeasonalAnime},
    Error,
};

endpoint_facade! {
    /// `/seasons` resource.
    SeasonEndpoints
}

impl SeasonEndpoints {
    /// Every year/season pair MyAnimeList has data for.
    pub async fn list(&self) -> Result<Response<Vec<SeasonArchive>>, Error> {
        self.transport.get_path("/seasons").await
    }

    pub async fn season(
        &self,
        year: u32,
        season: Season,
        query: &SeasonQuery,
    ) -> Result<PaginatedResponse<SeasonalAnime>, Error> {
        self.transport
            .get(&format!("/seasons/{}/{}", year, season), query)
            .await
    }

    pub async fn current(
        &self,
        query: &SeasonQuery,
    ) -> Result<PaginatedResponse<SeasonalAnime>, Error> {
        self.transport.get("/seasons/now", query).await
    }

    pub async fn upcoming(
        &self,
        query: &SeasonQuery,
    ) -> Result<PaginatedResponse<SeasonalAnime>, Error> {
        self.transport.get("/seasons/upcoming", query).await
    }
}

endpoint_facade! {
    /// `/schedules` resource.
    ScheduleEndpoints
}

impl ScheduleEndpoints {
    pub async fn schedules(
        &self,
        query: &ScheduleQuery,
    ) -> Result<PaginatedResponse<SeasonalAnime>, Error> {
        self.transport.get("/schedules", query).await
    }
}
