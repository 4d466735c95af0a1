use super::common::{PageQuery, PagedQuery, Query, QueryParams};

wire_enum! {
    /// Entry kind for `/users/{username}/history`.
    HistoryType {
        Anime => "anime",
        Manga => "manga",
        All => "all",
    }
}

wire_enum! {
    AnimeListStatus {
        Watching => "watching",
        Completed => "completed",
        OnHold => "on_hold",
        Dropped => "dropped",
        PlanToWatch => "plan_to_watch",
    }
}

wire_enum! {
    MangaListStatus {
        Reading => "reading",
        Completed => "completed",
        OnHold => "on_hold",
        Dropped => "dropped",
        PlanToRead => "plan_to_read",
    }
}

/// Parameters for `/users` search.
#[derive(Clone, Debug, Default)]
pub struct UserQuery {
    pub paging: PageQuery,
    pub q: Option<String>,
}

impl Query for UserQuery {
    fn params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        self.paging.append_to(&mut params);
        params.push("q", self.q.as_ref());
        params
    }
}

impl PagedQuery for UserQuery {
    fn get_paging(&mut self) -> &mut PageQuery {
        &mut self.paging
    }
}

impl UserQuery {
    pub fn with_search(mut self, q: &str) -> Self {
        self.q = Some(q.to_string());
        self
    }
}

/// Parameters for `/users/{username}/animelist`.
#[derive(Clone, Debug, Default)]
pub struct UserAnimeListQuery {
    pub status: Option<AnimeListStatus>,
    pub paging: PageQuery,
}

impl Query for UserAnimeListQuery {
    fn params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push("status", self.status);
        self.paging.append_to(&mut params);
        params
    }
}

impl PagedQuery for UserAnimeListQuery {
    fn get_paging(&mut self) -> &mut PageQuery {
        &mut self.paging
    }
}

impl UserAnimeListQuery {
    pub fn with_status(mut self, status: AnimeListStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// Parameters for `/users/{username}/mangalist`.
#[derive(Clone, Debug, Default)]
pub struct UserMangaListQuery {
    pub status: Option<MangaListStatus>,
    pub paging: PageQuery,
}

impl Query for UserMangaListQuery {
    fn params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push("status", self.status);
        self.paging.append_to(&mut params);
        params
    }
}

impl PagedQuery for UserMangaListQuery {
    fn get_paging(&mut self) -> &mut PageQuery {
        &mut self.paging
    }
}

impl UserMangaListQuery {
    pub fn with_status(mut self, status: MangaListStatus) -> Self {
        self.status = Some(status);
        self
    }
}
