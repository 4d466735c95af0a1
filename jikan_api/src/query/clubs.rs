use super::common::{PageQuery, PagedQuery, Query, QueryParams, SortDirection};

wire_enum! {
    /// Club visibility.
    ClubType {
        Public => "public",
        Private => "private",
        Secret => "secret",
    }
}

wire_enum! {
    ClubCategory {
        Anime => "anime",
        Manga => "manga",
        ActorsAndArtists => "actors_and_artists",
        Characters => "characters",
        CitiesAndNeighborhoods => "cities_and_neighborhoods",
        Companies => "companies",
        Conventions => "conventions",
        Games => "games",
        Japan => "japan",
        Music => "music",
        Other => "other",
        Schools => "schools",
    }
}

wire_enum! {
    ClubOrderBy {
        MalId => "mal_id",
        Name => "name",
        MembersCount => "members_count",
        Created => "created",
    }
}

/// Parameters for `/clubs` search.
#[derive(Clone, Debug, Default)]
pub struct ClubQuery {
    pub q: Option<String>,
    pub club_type: Option<ClubType>,
    pub category: Option<ClubCategory>,
    pub order_by: Option<ClubOrderBy>,
    pub sort: Option<SortDirection>,
    pub letter: Option<String>,
    pub paging: PageQuery,
}

impl Query for ClubQuery {
    fn params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push("q", self.q.as_ref());
        params.push("type", self.club_type);
        params.push("category", self.category);
        params.push("order_by", self.order_by);
        params.push("sort", self.sort);
        params.push("letter", self.letter.as_ref());
        self.paging.append_to(&mut params);
        params
    }
}

impl PagedQuery for ClubQuery {
    fn get_paging(&mut self) -> &mut PageQuery {
        &mut self.paging
    }
}

impl ClubQuery {
    pub fn with_search(mut self, q: &str) -> Self {
        self.q = Some(q.to_string());
        self
    }

    pub fn with_type(mut self, club_type: ClubType) -> Self {
        self.club_type = Some(club_type);
        self
    }

    pub fn with_category(mut self, category: ClubCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_order_by(mut self, order_by: ClubOrderBy) -> Self {
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
}

#[cfg(test)]
mod tests {
    use url::Url;

    use crate::query::{ClubCategory, ClubOrderBy, ClubQuery, ClubType, Query};

    #[test]
    fn test_club_query() {
        let url = Url::parse("https://example.com/clubs").unwrap();

        insta::assert_snapshot!(ClubQuery::default()
            .with_search("cowboy")
            .with_type(ClubType::Public)
            .with_category(ClubCategory::ActorsAndArtists)
            .with_order_by(ClubOrderBy::MembersCount)
            .add_to_url(&url)
            .to_string(), @"https://example.com/clubs?q=cowboy&type=public&category=actors_and_artists&order_by=members_count");
    }
}
