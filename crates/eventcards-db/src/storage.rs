//! Storage facade construction

use std::sync::Arc;

use eventcards_common::DatabaseConfig;
use eventcards_core::traits::Storage;
use sqlx::PgPool;

use crate::repositories::{
    PgCardRepository, PgCardTemplateRepository, PgEventRepository, PgGuestRepository,
    PgInvitationWriter,
};
use crate::transaction::WriteCoordinator;

/// Build the storage facade over one shared pool
pub fn new_storage(pool: PgPool, config: &DatabaseConfig) -> Storage {
    let coordinator = WriteCoordinator::new(pool, config.query_timeout());

    Storage {
        events: Arc::new(PgEventRepository::with_coordinator(coordinator.clone())),
        guests: Arc::new(PgGuestRepository::with_coordinator(coordinator.clone())),
        cards: Arc::new(PgCardRepository::with_coordinator(coordinator.clone())),
        card_templates: Arc::new(PgCardTemplateRepository::with_coordinator(
            coordinator.clone(),
        )),
        invitations: Arc::new(PgInvitationWriter::new(coordinator)),
    }
}
