//! Response envelopes shared by every endpoint.

use serde::{Deserialize, Serialize};

/// Paging metadata attached to collection responses.
///
/// Some listings (episode lists, user lists) only report
/// `last_visible_page` and `has_next_page`; the other fields are `None` there.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pagination {
    pub last_visible_page: u32,
    pub has_next_page: bool,
    #[serde(default)]
    pub current_page: Option<u32>,
    #[serde(default)]
    pub items: Option<PaginationItems>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationItems {
    /// Entries on this page.
    pub count: u32,
    /// Entries across all pages.
    pub total: u32,
    pub per_page: u32,
}

/// `{ "data": [...], "pagination": {...} }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}

/// `{ "data": ... }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response<T> {
    pub data: T,
}
