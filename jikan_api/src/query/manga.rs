use super::common::{PageQuery, PagedQuery, Query, QueryParams, SortDirection};

wire_enum! {
    MangaType {
        Manga => "manga",
        Novel => "novel",
        LightNovel => "lightnovel",
        OneShot => "oneshot",
        Doujin => "doujin",
        Manhwa => "manhwa",
        Manhua => "manhua",
    }
}

wire_enum! {
    /// Publishing status filter.
    MangaStatus {
        Publishing => "publishing",
        Complete => "complete",
        Hiatus => "hiatus",
        Discontinued => "discontinued",
        Upcoming => "upcoming",
    }
}

wire_enum! {
    MangaOrderBy {
        MalId => "mal_id",
        Title => "title",
        StartDate => "start_date",
        EndDate => "end_date",
        Chapters => "chapters",
        Volumes => "volumes",
        Score => "score",
        ScoredBy => "scored_by",
        Rank => "rank",
        Popularity => "popularity",
        Members => "members",
        Favorites => "favorites",
    }
}

/// Parameters for `/manga` search.
#[derive(Clone, Debug, Default)]
pub struct MangaQuery {
    pub q: Option<String>,
    pub manga_type: Option<MangaType>,
    pub score: Option<f64>,
    pub min_score: Option<f64>,
    pub max_score: Option<f64>,
    pub status: Option<MangaStatus>,
    pub sfw: Option<bool>,
    /// Comma-separated genre ids.
    pub genres: Option<String>,
    /// Comma-separated genre ids to exclude.
    pub genres_exclude: Option<String>,
    pub order_by: Option<MangaOrderBy>,
    pub sort: Option<SortDirection>,
    pub letter: Option<String>,
    /// Comma-separated magazine ids.
    pub magazines: Option<String>,
    pub paging: PageQuery,
}

impl Query for MangaQuery {
    fn params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push("q", self.q.as_ref());
        params.push("type", self.manga_type);
        params.push("score", self.score);
        params.push("min_score", self.min_score);
        params.push("max_score", self.max_score);
        params.push("status", self.status);
        params.push("sfw", self.sfw);
        params.push("genres", self.genres.as_ref());
        params.push("genres_exclude", self.genres_exclude.as_ref());
        params.push("order_by", self.order_by);
        params.push("sort", self.sort);
        params.push("letter", self.letter.as_ref());
        params.push("magazines", self.magazines.as_ref());
        self.paging.append_to(&mut params);
        params
    }
}

impl PagedQuery for MangaQuery {
    fn get_paging(&mut self) -> &mut PageQuery {
        &mut self.paging
    }
}

impl MangaQuery {
    pub fn with_search(mut self, q: &str) -> Self {
        self.q = Some(q.to_string());
        self
    }

    pub fn with_type(mut self, manga_type: MangaType) -> Self {
        self.manga_type = Some(manga_type);
        self
    }

    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }

    pub fn with_min_score(mut self, min_score: f64) -> Self {
        self.min_score = Some(min_score);
        self
    }

    pub fn with_max_score(mut self, max_score: f64) -> Self {
        self.max_score = Some(max_score);
        self
    }

    pub fn with_status(mut self, status: MangaStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_sfw(mut self, sfw: bool) -> Self {
        self.sfw = Some(sfw);
        self
    }

    pub fn with_genres(mut self, genres: &str) -> Self {
        self.genres = Some(genres.to_string());
        self
    }

    pub fn with_genres_exclude(mut self, genres_exclude: &str) -> Self {
        self.genres_exclude = Some(genres_exclude.to_string());
        self
    }

    pub fn with_order_by(mut self, order_by: MangaOrderBy) -> Self {
        self.order_by = Some(order_by);
        self
    }

    pub fn with_sort(mut self, sort: SortDirection) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn with_letter(mut self, letter: &str) -> Self {
        self.letter = Some(letter.to_string());
        self
    }

    pub fn with_magazines(mut self, magazines: &str) -> Self {
        self.magazines = Some(magazines.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use crate::query::{MangaOrderBy, MangaQuery, MangaStatus, MangaType, PagedQuery, Query, SortDirection};

    #[test]
    fn test_manga_query() {
        let url = Url::parse("https://example.com/manga").unwrap();

        insta::assert_snapshot!(MangaQuery::default()
            .with_search("berserk")
            .with_type(MangaType::LightNovel)
            .with_status(MangaStatus::Hiatus)
            .with_magazines("83")
            .add_to_url(&url)
            .to_string(), @"https://example.com/manga?q=berserk&type=lightnovel&status=hiatus&magazines=83");

        insta::assert_snapshot!(MangaQuery::default()
            .with_order_by(MangaOrderBy::Chapters)
            .with_sort(SortDirection::Asc)
            .with_letter("b")
            .with_page(4)
            .with_limit(5)
            .add_to_url(&url)
            .to_string(), @"https://example.com/manga?order_by=chapters&sort=asc&letter=b&page=4&limit=5");
    }
}
