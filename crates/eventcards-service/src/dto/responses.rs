//! Response DTOs
//!
//! Entities serialize directly; listings are wrapped with their page window.

use eventcards_core::pagination::{ListQuery, SortDirection};
use serde::Serialize;

/// One page of a listing with the parameters that produced it
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, query: &ListQuery) -> Self {
        let count = data.len();
        Self {
            data,
            pagination: PaginationMeta {
                limit: query.limit,
                offset: query.offset,
                sort: query.sort,
                search: (!query.search.is_empty()).then(|| query.search.clone()),
                count,
            },
        }
    }
}

/// Pagination metadata
#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    /// Page size limit used
    pub limit: i64,
    /// Number of items skipped
    pub offset: i64,
    pub sort: SortDirection,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Number of items on this page
    pub count: usize,
}
