//! Queries for the cross-entry listings: top lists, reviews and
//! recommendations.

use super::common::{PageQuery, PagedQuery, Query, QueryParams};

/// Parameters for the `/top/*` lists.
///
/// `filter` and `type` are passed through as given; the accepted values
/// differ per list (e.g. `airing`, `bypopularity`, `favorite` for anime).
#[derive(Clone, Debug, Default)]
pub struct TopQuery {
    pub filter: Option<String>,
    pub entry_type: Option<String>,
    pub paging: PageQuery,
}

impl Query for TopQuery {
    fn params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        self.paging.append_to(&mut params);
        params.push("filter", self.filter.as_ref());
        params.push("type", self.entry_type.as_ref());
        params
    }
}

impl PagedQuery for TopQuery {
    fn get_paging(&mut self) -> &mut PageQuery {
        &mut self.paging
    }
}

impl TopQuery {
    pub fn with_filter(mut self, filter: &str) -> Self {
        self.filter = Some(filter.to_string());
        self
    }

    pub fn with_type(mut self, entry_type: &str) -> Self {
        self.entry_type = Some(entry_type.to_string());
        self
    }
}

/// Parameters for `/reviews/anime` and `/reviews/manga`.
#[derive(Clone, Debug, Default)]
pub struct ReviewQuery {
    pub paging: PageQuery,
    pub preliminary: Option<bool>,
    pub spoiler: Option<bool>,
}

impl Query for ReviewQuery {
    fn params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        self.paging.append_to(&mut params);
        params.push("preliminary", self.preliminary);
        params.push("spoiler", self.spoiler);
        params
    }
}

impl PagedQuery for ReviewQuery {
    fn get_paging(&mut self) -> &mut PageQuery {
        &mut self.paging
    }
}

impl ReviewQuery {
    pub fn with_preliminary(mut self, preliminary: bool) -> Self {
        self.preliminary = Some(preliminary);
        self
    }

    pub fn with_spoiler(mut self, spoiler: bool) -> Self {
        self.spoiler = Some(spoiler);
        self
    }
}

/// Parameters for `/recommendations/anime` and `/recommendations/manga`.
pub type RecommendationQuery = PageQuery;
