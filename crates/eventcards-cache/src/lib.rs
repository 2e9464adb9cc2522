//! # eventcards-cache
//!
//! Redis caching layer for per-user projections.
//!
//! ## Example
//!
//! ```ignore
//! use eventcards_cache::{RedisPool, RedisUserCache};
//! use eventcards_core::traits::UserCache;
//!
//! let pool = RedisPool::from_config(&config.redis)?;
//! let cache = RedisUserCache::new(pool);
//!
//! // Drop the owner's cached projection after an event changes
//! cache.invalidate_user(event.user_id).await?;
//! ```

pub mod pool;
pub mod user_cache;

// Re-export pool types
pub use pool::{RedisPool, RedisPoolConfig, RedisPoolError, RedisResult};

// Re-export cache types
pub use user_cache::{user_key, RedisUserCache, USER_TTL_SECONDS};
