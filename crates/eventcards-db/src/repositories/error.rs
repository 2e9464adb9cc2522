//! Error handling utilities for repositories

use std::future::Future;
use std::time::Duration;

use eventcards_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
///
/// Constraint violations become caller-facing errors; connection-level
/// failures are reported as transient.
pub fn map_db_error(e: SqlxError) -> DomainError {
    match &e {
        SqlxError::Database(db_err) => {
            let detail = match db_err.constraint() {
                Some(constraint) => format!("{} ({constraint})", db_err.message()),
                None => db_err.message().to_string(),
            };

            if db_err.is_unique_violation() {
                DomainError::Conflict(detail)
            } else if db_err.is_foreign_key_violation() {
                DomainError::InvalidReference(detail)
            } else if db_err.is_check_violation() {
                DomainError::ValidationError(detail)
            } else {
                DomainError::DatabaseError(e.to_string())
            }
        }
        SqlxError::PoolTimedOut | SqlxError::PoolClosed | SqlxError::Io(_) | SqlxError::Tls(_) => {
            DomainError::DatabaseUnavailable(e.to_string())
        }
        _ => DomainError::DatabaseError(e.to_string()),
    }
}

/// Run a database future under a deadline.
///
/// On expiry the future is dropped, which cancels the in-flight query.
pub async fn bounded<F, T>(limit: Duration, fut: F) -> Result<T, DomainError>
where
    F: Future<Output = Result<T, SqlxError>>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => result.map_err(map_db_error),
        Err(_) => Err(DomainError::QueryTimeout(limit)),
    }
}

/// Escape LIKE wildcards so the term matches literally, then wrap it for a
/// substring match
pub fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
