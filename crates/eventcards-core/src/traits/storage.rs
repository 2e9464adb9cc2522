//! Storage facade - one member per repository

use std::sync::Arc;

use crate::entities::{Card, CardTemplate, Event, Guest};

use super::repositories::{InvitationWriter, Repository};

/// Capability set handed to the service layer.
///
/// Built once at startup by the infrastructure layer. Callers depend on this
/// struct only, so any member can be replaced by a fake in tests.
#[derive(Clone)]
pub struct Storage {
    pub events: Arc<dyn Repository<Event>>,
    pub guests: Arc<dyn Repository<Guest>>,
    pub cards: Arc<dyn Repository<Card>>,
    pub card_templates: Arc<dyn Repository<CardTemplate>>,
    pub invitations: Arc<dyn InvitationWriter>,
}

impl std::fmt::Debug for Storage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storage").finish_non_exhaustive()
    }
}
