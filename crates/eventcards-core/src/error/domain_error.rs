//! Domain errors - error types for the domain layer

use std::time::Duration;

use thiserror::Error;
use validator::ValidationErrors;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: i64 },

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Conflict: {0}")]
    Conflict(String),

    // =========================================================================
    // Transient Errors (safe to retry)
    // =========================================================================
    #[error("Query timed out after {0:?}")]
    QueryTimeout(Duration),

    #[error("Database unavailable: {0}")]
    DatabaseUnavailable(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Create a "not found" error for the given entity name and id
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        Self::NotFound { entity, id }
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidReference(_) => "INVALID_REFERENCE",
            Self::Conflict(_) => "CONFLICT",
            Self::QueryTimeout(_) => "QUERY_TIMEOUT",
            Self::DatabaseUnavailable(_) => "DATABASE_UNAVAILABLE",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::CacheError(_) => "CACHE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_) | Self::InvalidReference(_))
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict(_))
    }

    /// Check if the failure is transient and the caller may retry
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::QueryTimeout(_) | Self::DatabaseUnavailable(_))
    }
}

impl From<ValidationErrors> for DomainError {
    fn from(errors: ValidationErrors) -> Self {
        Self::ValidationError(errors.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::not_found("Event", 1);
        assert_eq!(err.code(), "NOT_FOUND");

        let err = DomainError::QueryTimeout(Duration::from_secs(5));
        assert_eq!(err.code(), "QUERY_TIMEOUT");
    }

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::not_found("Guest", 7).is_not_found());
        assert!(!DomainError::Conflict("dup".to_string()).is_not_found());
    }

    #[test]
    fn test_classification() {
        assert!(DomainError::validation("bad").is_validation());
        assert!(DomainError::InvalidReference("user 9".to_string()).is_validation());
        assert!(DomainError::QueryTimeout(Duration::from_secs(5)).is_transient());
        assert!(DomainError::DatabaseUnavailable("pool closed".to_string()).is_transient());
        assert!(!DomainError::DatabaseError("syntax".to_string()).is_transient());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::not_found("Card", 123);
        assert_eq!(err.to_string(), "Card not found: 123");

        let err = DomainError::validation("limit must be between 1 and 100");
        assert_eq!(err.to_string(), "Validation error: limit must be between 1 and 100");
    }
}
