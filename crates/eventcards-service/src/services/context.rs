//! Service context - dependency container for services
//!
//! Holds the storage facade, the user cache, and the listing defaults.

use std::sync::Arc;

use eventcards_cache::{RedisPool, RedisUserCache};
use eventcards_common::{AppConfig, AppError};
use eventcards_core::entities::{Card, CardTemplate, Event, Guest};
use eventcards_core::pagination::ListDefaults;
use eventcards_core::traits::{InvitationWriter, Repository, Storage, UserCache};
use eventcards_db::{create_pool, new_storage};
use tracing::info;

use super::error::ServiceResult;

/// Service context containing all dependencies
///
/// Services borrow it for the duration of one call; every member is a trait
/// object so tests can swap in fakes.
#[derive(Clone)]
pub struct ServiceContext {
    storage: Storage,
    user_cache: Arc<dyn UserCache>,
    list_defaults: ListDefaults,
}

impl ServiceContext {
    /// Create a new service context with default listing parameters
    pub fn new(storage: Storage, user_cache: Arc<dyn UserCache>) -> Self {
        Self {
            storage,
            user_cache,
            list_defaults: ListDefaults::default(),
        }
    }

    /// Connect to PostgreSQL and Redis and wire the production implementations
    pub async fn connect(config: &AppConfig) -> ServiceResult<Self> {
        let pool = create_pool(&config.database)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        let storage = new_storage(pool, &config.database);

        let redis = RedisPool::from_config(&config.redis)
            .map_err(|e| AppError::Cache(e.to_string()))?;
        let user_cache = Arc::new(RedisUserCache::new(redis));

        info!(
            query_timeout_secs = config.database.query_timeout_secs,
            "Service context ready"
        );
        Ok(Self::new(storage, user_cache))
    }

    // === Storage ===

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    pub fn events(&self) -> &dyn Repository<Event> {
        self.storage.events.as_ref()
    }

    pub fn guests(&self) -> &dyn Repository<Guest> {
        self.storage.guests.as_ref()
    }

    pub fn cards(&self) -> &dyn Repository<Card> {
        self.storage.cards.as_ref()
    }

    pub fn card_templates(&self) -> &dyn Repository<CardTemplate> {
        self.storage.card_templates.as_ref()
    }

    pub fn invitations(&self) -> &dyn InvitationWriter {
        self.storage.invitations.as_ref()
    }

    // === Cache ===

    pub fn user_cache(&self) -> &dyn UserCache {
        self.user_cache.as_ref()
    }

    // === Listing ===

    /// Fallbacks for parameters missing from a listing request
    pub fn list_defaults(&self) -> &ListDefaults {
        &self.list_defaults
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("storage", &self.storage)
            .field("user_cache", &"...")
            .field("list_defaults", &self.list_defaults)
            .finish()
    }
}
