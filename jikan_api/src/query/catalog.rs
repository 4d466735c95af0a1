//! Queries for the reference catalogs: genres, producers and magazines.

use super::common::{PageQuery, PagedQuery, Query, QueryParams, SortDirection};

wire_enum! {
    /// Which genre family `/genres/{anime,manga}` returns.
    GenreFilter {
        Genres => "genres",
        ExplicitGenres => "explicit_genres",
        Themes => "themes",
        Demographics => "demographics",
    }
}

wire_enum! {
    CatalogOrderBy {
        MalId => "mal_id",
        Name => "name",
        Count => "count",
    }
}

/// Parameters for `/genres/anime` and `/genres/manga`.
#[derive(Clone, Debug, Default)]
pub struct GenreQuery {
    pub filter: Option<GenreFilter>,
}

impl Query for GenreQuery {
    fn params(&self) -> QueryParams {
        QueryParams::new().with("filter", self.filter)
    }
}

impl GenreQuery {
    pub fn with_filter(mut self, filter: GenreFilter) -> Self {
        self.filter = Some(filter);
        self
    }
}

/// Parameters for the `/producers` and `/magazines` listings, which accept
/// the same set.
#[derive(Clone, Debug, Default)]
pub struct CatalogQuery {
    pub q: Option<String>,
    pub order_by: Option<CatalogOrderBy>,
    pub sort: Option<SortDirection>,
    pub letter: Option<String>,
    pub paging: PageQuery,
}

pub type ProducerQuery = CatalogQuery;
pub type MagazineQuery = CatalogQuery;

impl Query for CatalogQuery {
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

impl PagedQuery for CatalogQuery {
    fn get_paging(&mut self) -> &mut PageQuery {
        &mut self.paging
    }
}

impl CatalogQuery {
    pub fn with_search(mut self, q: &str) -> Self {
        self.q = Some(q.to_string());
        self
    }

    pub fn with_order_by(mut self, order_by: CatalogOrderBy) -> Self {
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

    use crate::query::{CatalogOrderBy, GenreFilter, GenreQuery, PagedQuery, ProducerQuery, Query, SortDirection};

    #[test]
    fn test_genre_query() {
        let url = Url::parse("https://example.com/genres/anime").unwrap();

        insta::assert_snapshot!(GenreQuery::default().add_to_url(&url).to_string(), @"https://example.com/genres/anime");
        insta::assert_snapshot!(GenreQuery::default()
            .with_filter(GenreFilter::ExplicitGenres)
            .add_to_url(&url)
            .to_string(), @"https://example.com/genres/anime?filter=explicit_genres");
    }

    #[test]
    fn test_catalog_query() {
        let url = Url::parse("https://example.com/producers").unwrap();

        insta::assert_snapshot!(ProducerQuery::default()
            .with_search("sunrise")
            .with_order_by(CatalogOrderBy::Count)
            .with_sort(SortDirection::Desc)
            .with_page(1)
            .add_to_url(&url)
            .to_string(), @"https://example.com/producers?q=sunrise&order_by=count&sort=desc&page=1");
    }
}
