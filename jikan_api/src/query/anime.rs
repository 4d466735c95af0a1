use super::common::{PageQuery, PagedQuery, Query, QueryParams, SortDirection};

wire_enum! {
    /// Anime media type.
    AnimeType {
        Tv => "tv",
        Movie => "movie",
        Ova => "ova",
        Special => "special",
        Ona => "ona",
        Music => "music",
    }
}

wire_enum! {
    /// Airing status filter.
    AnimeStatus {
        Airing => "airing",
        Complete => "complete",
        Upcoming => "upcoming",
    }
}

wire_enum! {
    /// Audience rating filter.
    AnimeRating {
        /// All ages.
        G => "g",
        /// Children.
        Pg => "pg",
        /// Teens 13 or older.
        Pg13 => "pg13",
        /// 17+ (violence & profanity).
        R17 => "r17",
        /// Mild nudity.
        R => "r",
        /// Hentai.
        Rx => "rx",
    }
}

wire_enum! {
    AnimeOrderBy {
        MalId => "mal_id",
        Title => "title",
        Type => "type",
        Rating => "rating",
        StartDate => "start_date",
        EndDate => "end_date",
        Episodes => "episodes",
        Score => "score",
        ScoredBy => "scored_by",
        Rank => "rank",
        Popularity => "popularity",
        Members => "members",
        Favorites => "favorites",
    }
}

wire_enum! {
    /// Topic filter for `/anime/{id}/forum`.
    ForumFilter {
        All => "all",
        Episode => "episode",
        Other => "other",
    }
}

/// Parameters for `/anime` search.
#[derive(Clone, Debug, Default)]
pub struct AnimeQuery {
    pub q: Option<String>,
    pub anime_type: Option<AnimeType>,
    pub score: Option<f64>,
    pub min_score: Option<f64>,
    pub max_score: Option<f64>,
    pub status: Option<AnimeStatus>,
    pub rating: Option<AnimeRating>,
    pub sfw: Option<bool>,
    /// Comma-separated genre ids.
    pub genres: Option<String>,
    /// Comma-separated genre ids to exclude.
    pub genres_exclude: Option<String>,
    pub order_by: Option<AnimeOrderBy>,
    pub sort: Option<SortDirection>,
    pub letter: Option<String>,
    /// Comma-separated producer ids.
    pub producers: Option<String>,
    pub paging: PageQuery,
}

impl Query for AnimeQuery {
    fn params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push("q", self.q.as_ref());
        params.push("type", self.anime_type);
        params.push("score", self.score);
        params.push("min_score", self.min_score);
        params.push("max_score", self.max_score);
        params.push("status", self.status);
        params.push("rating", self.rating);
        params.push("sfw", self.sfw);
        params.push("genres", self.genres.as_ref());
        params.push("genres_exclude", self.genres_exclude.as_ref());
        params.push("order_by", self.order_by);
        params.push("sort", self.sort);
        params.push("letter", self.letter.as_ref());
        params.push("producers", self.producers.as_ref());
        self.paging.append_to(&mut params);
        params
    }
}

impl PagedQuery for AnimeQuery {
    fn get_paging(&mut self) -> &mut PageQuery {
        &mut self.paging
    }
}

impl AnimeQuery {
    pub fn with_search(mut self, q: &str) -> Self {
        self.q = Some(q.to_string());
        self
    }

    pub fn with_type(mut self, anime_type: AnimeType) -> Self {
        self.anime_type = Some(anime_type);
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

    pub fn with_status(mut self, status: AnimeStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_rating(mut self, rating: AnimeRating) -> Self {
        self.rating = Some(rating);
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

    pub fn with_order_by(mut self, order_by: AnimeOrderBy) -> Self {
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

    pub fn with_producers(mut self, producers: &str) -> Self {
        self.producers = Some(producers.to_string());
        self
    }
}
