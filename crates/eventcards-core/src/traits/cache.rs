//! Cache port for per-user projections

use async_trait::async_trait;

use super::repositories::RepoResult;

/// Cache of per-user projections, keyed by user id.
///
/// Invalidation is best-effort: callers log a failure and carry on, leaving
/// the entry stale until it expires on its own.
#[async_trait]
pub trait UserCache: Send + Sync {
    /// Drop the cached projection of a user
    async fn invalidate_user(&self, user_id: i64) -> RepoResult<()>;
}
