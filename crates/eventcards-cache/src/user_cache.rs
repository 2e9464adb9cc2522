//! Per-user projection cache backed by Redis
//!
//! Entries live under `user-{id}` and expire after [`USER_TTL_SECONDS`], which
//! bounds how long a missed invalidation can leave a stale entry behind.

use async_trait::async_trait;
use tracing::{debug, instrument};

use eventcards_core::error::DomainError;
use eventcards_core::traits::{RepoResult, UserCache};

use crate::pool::{RedisPool, RedisPoolError};

/// Lifetime of a cached user projection
pub const USER_TTL_SECONDS: u64 = 60;

/// Redis key holding a user's cached projection
pub fn user_key(user_id: i64) -> String {
    format!("user-{user_id}")
}

impl From<RedisPoolError> for DomainError {
    fn from(err: RedisPoolError) -> Self {
        DomainError::CacheError(err.to_string())
    }
}

/// Redis-backed [`UserCache`]
#[derive(Debug, Clone)]
pub struct RedisUserCache {
    pool: RedisPool,
}

impl RedisUserCache {
    pub fn new(pool: RedisPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserCache for RedisUserCache {
    #[instrument(skip(self))]
    async fn invalidate_user(&self, user_id: i64) -> RepoResult<()> {
        let existed = self.pool.delete(&user_key(user_id)).await?;
        debug!(existed, "User cache entry invalidated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::RedisPoolConfig;
    use redis::AsyncCommands;

    /// Helper to create a test pool; `None` when Redis is not configured
    fn get_test_pool() -> Option<RedisPool> {
        let url = std::env::var("REDIS_URL").ok()?;
        RedisPool::new(RedisPoolConfig {
            url,
            max_connections: 2,
        })
        .ok()
    }

    #[test]
    fn test_user_key_format() {
        assert_eq!(user_key(42), "user-42");
    }

    #[test]
    fn test_pool_errors_become_cache_errors() {
        let err = DomainError::from(RedisPoolError::CreatePool("bad url".to_string()));
        assert!(matches!(err, DomainError::CacheError(_)));
        assert!(!err.is_transient());
    }

    #[test]
    fn test_cache_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RedisUserCache>();
    }

    #[tokio::test]
    async fn test_invalidate_removes_entry() {
        let Some(pool) = get_test_pool() else {
            eprintln!("Skipping test: REDIS_URL not set");
            return;
        };
        let cache = RedisUserCache::new(pool.clone());

        // Entries are written by the account service; seed one the same way
        let user_id = i64::from(std::process::id()) + 9_000_000;
        let key = user_key(user_id);
        let mut conn = pool.get().await.unwrap();
        conn.set_ex::<_, _, ()>(&key, r#"{"id":1,"username":"cached"}"#, USER_TTL_SECONDS)
            .await
            .unwrap();

        cache.invalidate_user(user_id).await.unwrap();
        let exists: bool = conn.exists(&key).await.unwrap();
        assert!(!exists);

        // Invalidating a missing entry is not an error
        cache.invalidate_user(user_id).await.unwrap();
    }
}
