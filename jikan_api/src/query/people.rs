use super::common::{PageQuery, PagedQuery, Query, QueryParams, SortDirection};

wire_enum! {
    CharacterOrderBy {
        MalId => "mal_id",
        Name => "name",
        Favorites => "favorites",
    }
}

wire_enum! {
    PersonOrderBy {
        MalId => "mal_id",
        Name => "name",
        Birthday => "birthday",
        Favorites => "favorites",
    }
}

/// Parameters for `/characters` search.
#[derive(Clone, Debug, Default)]
pub struct CharacterQuery {
    pub q: Option<String>,
    pub order_by: Option<CharacterOrderBy>,
    pub sort: Option<SortDirection>,
    pub letter: Option<String>,
    pub paging: PageQuery,
}

impl Query for CharacterQuery {
    fn params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push("q", self.q.as_ref());
        params.push("order_by", self.order_by);
        params.push("sort", self.sort);
        params.push("letter", self.letter.as_ref());
        self.paging.append_to(&mut params);
        params
    }
}

impl PagedQuery for CharacterQuery {
    fn get_paging(&mut self) -> &mut PageQuery {
        &mut self.paging
    }
}

impl CharacterQuery {
    pub fn with_search(mut self, q: &str) -> Self {
        self.q = Some(q.to_string());
        self
    }

    pub fn with_order_by(mut self, order_by: CharacterOrderBy) -> Self {
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

/// Parameters for `/people` search.
#[derive(Clone, Debug, Default)]
pub struct PersonQuery {
    pub q: Option<String>,
    pub order_by: Option<PersonOrderBy>,
    pub sort: Option<SortDirection>,
    pub letter: Option<String>,
    pub paging: PageQuery,
}

impl Query for PersonQuery {
    fn params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push("q", self.q.as_ref());
        params.push("order_by", self.order_by);
        params.push("sort", self.sort);
        params.push("letter", self.letter.as_ref());
        self.paging.append_to(&mut params);
        params
    }
}

impl PagedQuery for PersonQuery {
    fn get_paging(&mut self) -> &mut PageQuery {
        &mut self.paging
    }
}

impl PersonQuery {
    pub fn with_search(mut self, q: &str) -> Self {
        self.q = Some(q.to_string());
        self
    }

    pub fn with_order_by(mut self, order_by: PersonOrderBy) -> Self {
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

    use crate::query::{
        CharacterOrderBy, CharacterQuery, PagedQuery, PersonOrderBy, PersonQuery, Query,
        SortDirection,
    };

    #[test]
    fn test_character_query() {
        let url = Url::parse("https://example.com/characters").unwrap();

        insta::assert_snapshot!(CharacterQuery::default()
            .with_search("lelouch")
            .with_order_by(CharacterOrderBy::Favorites)
            .with_sort(SortDirection::Desc)
            .add_to_url(&url)
            .to_string(), @"https://example.com/characters?q=lelouch&order_by=favorites&sort=desc");
    }

    #[test]
    fn test_person_query() {
        let url = Url::parse("https://example.com/people").unwrap();

        insta::assert_snapshot!(PersonQuery::default()
            .with_order_by(PersonOrderBy::Birthday)
            .with_letter("k")
            .with_limit(3)
            .add_to_url(&url)
            .to_string(), @"https://example.com/people?order_by=birthday&letter=k&limit=3");
    }
}
