//! Shared query infrastructure: [`ParamValue`], [`QueryParams`], the [`Query`]
//! and [`PagedQuery`] traits, [`PageQuery`] and [`SortDirection`].

use std::str::FromStr;

use url::Url;

/// A single scalar query parameter value. `Null` entries are never sent.
#[derive(Clone, Debug, PartialEq)]
pub enum ParamValue {
    Null,
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl ParamValue {
    /// String form sent on the wire, or `None` for `Null`.
    pub fn to_query_value(&self) -> Option<String> {
        match self {
            ParamValue::Null => None,
            ParamValue::Str(s) => Some(s.clone()),
            ParamValue::Int(i) => Some(i.to_string()),
            ParamValue::Float(f) => Some(f.to_string()),
            ParamValue::Bool(b) => Some(b.to_string()),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ParamValue::Null)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}
impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}
impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        ParamValue::Str(value.clone())
    }
}
impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}
impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Int(value.into())
    }
}
impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Int(value.into())
    }
}
impl From<u16> for ParamValue {
    fn from(value: u16) -> Self {
        ParamValue::Int(value.into())
    }
}
impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}
impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}
impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ParamValue::Null, Into::into)
    }
}

/// Insertion-ordered query parameters for a single request.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryParams {
    entries: Vec<(String, ParamValue)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a parameter. `None` and [`ParamValue::Null`] are kept in the
    /// list but skipped when the URL is built.
    pub fn push(&mut self, name: &str, value: impl Into<ParamValue>) {
        self.entries.push((name.to_string(), value.into()));
    }

    /// Builder form of [`Self::push`].
    pub fn with(mut self, name: &str, value: impl Into<ParamValue>) -> Self {
        self.push(name, value);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Name/value pairs that will be sent, in insertion order.
    pub fn pairs(&self) -> Vec<(&str, String)> {
        self.entries
            .iter()
            .filter_map(|(name, value)| value.to_query_value().map(|v| (name.as_str(), v)))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|(_, value)| value.is_null())
    }

    /// Appends the non-null parameters to the URL, returning the modified URL.
    /// A URL without parameters is returned without a `?`.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        let pairs = self.pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        url
    }
}

impl<K: AsRef<str>, V: Into<ParamValue>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = QueryParams::new();
        for (name, value) in iter {
            params.push(name.as_ref(), value);
        }
        params
    }
}

/// Trait implemented by all query builders. Provides URL serialization.
pub trait Query {
    /// Parameters in the order they are sent.
    fn params(&self) -> QueryParams;

    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url {
        self.params().add_to_url(url)
    }
}

impl Query for QueryParams {
    fn params(&self) -> QueryParams {
        self.clone()
    }

    fn add_to_url(&self, url: &Url) -> Url {
        QueryParams::add_to_url(self, url)
    }
}

/// Page number and page size, shared by every paginated query.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PageQuery {
    /// Page number (1-indexed). `None` uses the API default.
    pub page: Option<u32>,
    /// Results per page. `None` uses the API default.
    pub limit: Option<u32>,
}

impl PageQuery {
    pub(crate) fn append_to(&self, params: &mut QueryParams) {
        params.push("page", self.page);
        params.push("limit", self.limit);
    }
}

impl Query for PageQuery {
    fn params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        self.append_to(&mut params);
        params
    }
}

/// Shared builder methods for queries that accept `page` and `limit`.
pub trait PagedQuery: Query {
    /// Returns a mutable reference to the paging fields.
    fn get_paging(&mut self) -> &mut PageQuery;

    /// Sets the page number (1-indexed).
    fn with_page(mut self, page: u32) -> Self
    where
        Self: Sized,
    {
        self.get_paging().page = Some(page);
        self
    }

    /// Sets the number of results per page.
    fn with_limit(mut self, limit: u32) -> Self
    where
        Self: Sized,
    {
        self.get_paging().limit = Some(limit);
        self
    }
}

impl PagedQuery for PageQuery {
    fn get_paging(&mut self) -> &mut PageQuery {
        self
    }
}

/// Sort order for API results.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}
impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        })
    }
}
impl FromStr for SortDirection {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(()),
        }
    }
}
impl From<SortDirection> for ParamValue {
    fn from(value: SortDirection) -> Self {
        ParamValue::Str(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use super::*;

    fn base() -> Url {
        Url::parse("https://example.com/anime").unwrap()
    }

    #[test]
    fn null_entries_are_dropped() {
        let params = QueryParams::new()
            .with("q", "naruto")
            .with("limit", None::<u32>)
            .with("page", ParamValue::Null);
        insta::assert_snapshot!(params.add_to_url(&base()).to_string(), @"https://example.com/anime?q=naruto");
    }

    #[test]
    fn insertion_order_is_kept() {
        let params = QueryParams::new().with("q", "naruto").with("limit", 10);
        insta::assert_snapshot!(params.add_to_url(&base()).to_string(), @"https://example.com/anime?q=naruto&limit=10");

        let params = QueryParams::new().with("limit", 10).with("q", "naruto");
        insta::assert_snapshot!(params.add_to_url(&base()).to_string(), @"https://example.com/anime?limit=10&q=naruto");
    }

    #[test]
    fn scalars_use_their_string_form() {
        let params = QueryParams::new()
            .with("sfw", true)
            .with("min_score", 7.5)
            .with("max_score", 9.0)
            .with("q", "cowboy bebop");
        insta::assert_snapshot!(params.add_to_url(&base()).to_string(), @"https://example.com/anime?sfw=true&min_score=7.5&max_score=9&q=cowboy+bebop");
    }

    #[test]
    fn empty_params_leave_no_query_string() {
        let params = QueryParams::new().with("page", None::<u32>);
        assert!(params.is_empty());
        let url = params.add_to_url(&base());
        assert_eq!(url.query(), None);
        assert_eq!(url.as_str(), "https://example.com/anime");
    }

    #[test]
    fn collect_from_pairs() {
        let params: QueryParams = vec![("page", Some(2)), ("limit", None)].into_iter().collect();
        assert_eq!(params.pairs(), vec![("page", "2".to_string())]);
    }

    #[test]
    fn paged_builder_methods() {
        let query = PageQuery::default().with_page(3).with_limit(25);
        insta::assert_snapshot!(query.add_to_url(&base()).to_string(), @"https://example.com/anime?page=3&limit=25");
    }

    #[test]
    fn sort_direction_round_trips_wire_form() {
        assert_eq!(SortDirection::Asc.to_string(), "asc");
        assert_eq!("desc".parse::<SortDirection>(), Ok(SortDirection::Desc));
        assert!("up".parse::<SortDirection>().is_err());
    }
}
