//! List query descriptor
//!
//! Offset-based pagination, sort direction, and free-text search parsed from
//! raw query parameters. Every collection listing goes through this type.

use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

use crate::error::DomainError;

/// Default page size
pub const DEFAULT_LIMIT: i64 = 20;
/// Maximum page size
pub const MAX_LIMIT: i64 = 100;

/// Ordering by creation time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    /// SQL keyword for `ORDER BY`
    #[must_use]
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }

    #[must_use]
    pub fn is_ascending(self) -> bool {
        matches!(self, Self::Asc)
    }
}

impl FromStr for SortDirection {
    type Err = QueryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(QueryParseError::InvalidSort(other.to_string())),
        }
    }
}

/// Errors raised while reading raw query parameters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryParseError {
    #[error("Invalid '{param}' parameter: expected a non-negative integer, got '{value}'")]
    InvalidInteger { param: &'static str, value: String },

    #[error("Invalid 'sort' parameter: expected 'asc' or 'desc', got '{0}'")]
    InvalidSort(String),
}

impl From<QueryParseError> for DomainError {
    fn from(err: QueryParseError) -> Self {
        DomainError::ValidationError(err.to_string())
    }
}

/// Fallback values for parameters missing from the request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListDefaults {
    pub limit: i64,
    pub offset: i64,
    pub sort: SortDirection,
    pub search: String,
}

impl Default for ListDefaults {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
            sort: SortDirection::Desc,
            search: String::new(),
        }
    }
}

/// Validated pagination/filter parameters for one listing request
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct ListQuery {
    /// Maximum number of items to return
    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100"))]
    pub limit: i64,
    /// Number of items to skip
    #[validate(range(min = 0, message = "offset must not be negative"))]
    pub offset: i64,
    pub sort: SortDirection,
    /// Case-insensitive substring filter; empty means no filter
    #[validate(length(max = 100, message = "search must be at most 100 characters"))]
    pub search: String,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self::from(&ListDefaults::default())
    }
}

impl From<&ListDefaults> for ListQuery {
    fn from(defaults: &ListDefaults) -> Self {
        Self {
            limit: defaults.limit,
            offset: defaults.offset,
            sort: defaults.sort,
            search: defaults.search.clone(),
        }
    }
}

impl ListQuery {
    /// Create a query for one page with default sort and no search
    pub fn new(limit: i64, offset: i64) -> Self {
        Self {
            limit,
            offset,
            ..Self::default()
        }
    }

    pub fn with_sort(mut self, sort: SortDirection) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Check whether a search filter applies
    pub fn has_search(&self) -> bool {
        !self.search.is_empty()
    }

    /// Read `limit`, `offset`, `sort` and `search` from raw query parameters.
    ///
    /// Missing (or empty) `limit`, `offset` and `sort` fall back to `defaults`.
    /// `search` is taken verbatim. Upper bounds are not checked here; see
    /// [`ListQuery::parse_and_validate`].
    pub fn parse(
        raw: &HashMap<String, String>,
        defaults: &ListDefaults,
    ) -> Result<Self, QueryParseError> {
        let limit = match present(raw, "limit") {
            Some(value) => parse_non_negative("limit", value)?,
            None => defaults.limit,
        };

        let offset = match present(raw, "offset") {
            Some(value) => parse_non_negative("offset", value)?,
            None => defaults.offset,
        };

        let sort = match present(raw, "sort") {
            Some(value) => value.parse()?,
            None => defaults.sort,
        };

        let search = raw
            .get("search")
            .cloned()
            .unwrap_or_else(|| defaults.search.clone());

        Ok(Self {
            limit,
            offset,
            sort,
            search,
        })
    }

    /// Parse, then run struct-level validation
    pub fn parse_and_validate(
        raw: &HashMap<String, String>,
        defaults: &ListDefaults,
    ) -> Result<Self, DomainError> {
        let query = Self::parse(raw, defaults)?;
        query.validate()?;
        Ok(query)
    }
}

fn present<'a>(raw: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    raw.get(key).map(String::as_str).filter(|v| !v.is_empty())
}

fn parse_non_negative(param: &'static str, value: &str) -> Result<i64, QueryParseError> {
    value
        .parse::<i64>()
        .ok()
        .filter(|n| *n >= 0)
        .ok_or_else(|| QueryParseError::InvalidInteger {
            param,
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_missing_params_use_defaults() {
        let query = ListQuery::parse(&HashMap::new(), &ListDefaults::default()).unwrap();
        assert_eq!(query.limit, 20);
        assert_eq!(query.offset, 0);
        assert_eq!(query.sort, SortDirection::Desc);
        assert_eq!(query.search, "");
    }

    #[test]
    fn test_custom_defaults() {
        let defaults = ListDefaults {
            limit: 5,
            sort: SortDirection::Asc,
            ..ListDefaults::default()
        };
        let query = ListQuery::parse(&HashMap::new(), &defaults).unwrap();
        assert_eq!(query.limit, 5);
        assert_eq!(query.sort, SortDirection::Asc);
    }

    #[test]
    fn test_all_params_present() {
        let raw = params(&[
            ("limit", "2"),
            ("offset", "4"),
            ("sort", "asc"),
            ("search", "  Smith "),
        ]);
        let query = ListQuery::parse(&raw, &ListDefaults::default()).unwrap();
        assert_eq!(query.limit, 2);
        assert_eq!(query.offset, 4);
        assert_eq!(query.sort, SortDirection::Asc);
        // search is not trimmed
        assert_eq!(query.search, "  Smith ");
    }

    #[test]
    fn test_invalid_sort_is_rejected() {
        let raw = params(&[("sort", "upward")]);
        let err = ListQuery::parse(&raw, &ListDefaults::default()).unwrap_err();
        assert_eq!(err, QueryParseError::InvalidSort("upward".to_string()));

        let raw = params(&[("sort", "DESC")]);
        assert!(ListQuery::parse(&raw, &ListDefaults::default()).is_err());
    }

    #[test]
    fn test_negative_limit_is_rejected() {
        let raw = params(&[("limit", "-1")]);
        let err = ListQuery::parse(&raw, &ListDefaults::default()).unwrap_err();
        assert!(matches!(
            err,
            QueryParseError::InvalidInteger { param: "limit", .. }
        ));
    }

    #[test]
    fn test_non_numeric_offset_is_rejected() {
        let raw = params(&[("offset", "ten")]);
        let err = ListQuery::parse(&raw, &ListDefaults::default()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid 'offset' parameter: expected a non-negative integer, got 'ten'"
        );
    }

    #[test]
    fn test_empty_values_fall_back() {
        let raw = params(&[("limit", ""), ("sort", "")]);
        let query = ListQuery::parse(&raw, &ListDefaults::default()).unwrap();
        assert_eq!(query.limit, DEFAULT_LIMIT);
        assert_eq!(query.sort, SortDirection::Desc);
    }

    #[test]
    fn test_parser_does_not_cap_limit() {
        let raw = params(&[("limit", "500")]);
        let query = ListQuery::parse(&raw, &ListDefaults::default()).unwrap();
        assert_eq!(query.limit, 500);
        assert!(query.validate().is_err());
    }

    #[test]
    fn test_parse_and_validate_maps_to_validation_error() {
        let raw = params(&[("limit", "-1")]);
        let err = ListQuery::parse_and_validate(&raw, &ListDefaults::default()).unwrap_err();
        assert!(err.is_validation());

        let raw = params(&[("limit", "0")]);
        let err = ListQuery::parse_and_validate(&raw, &ListDefaults::default()).unwrap_err();
        assert!(err.is_validation());

        let raw = params(&[("limit", "100"), ("search", "ada")]);
        let query = ListQuery::parse_and_validate(&raw, &ListDefaults::default()).unwrap();
        assert_eq!(query.limit, MAX_LIMIT);
    }

    #[test]
    fn test_search_length_is_bounded() {
        let long = "x".repeat(101);
        let query = ListQuery::default().with_search(long);
        assert!(query.validate().is_err());

        let ok = ListQuery::default().with_search("x".repeat(100));
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_sort_as_sql() {
        assert_eq!(SortDirection::Asc.as_sql(), "ASC");
        assert_eq!(SortDirection::Desc.as_sql(), "DESC");
        assert!(SortDirection::Asc.is_ascending());
    }
}
