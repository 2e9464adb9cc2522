//! Pagination and filtering for collection listings

mod list_query;

pub use list_query::{
    ListDefaults, ListQuery, QueryParseError, SortDirection, DEFAULT_LIMIT, MAX_LIMIT,
};
