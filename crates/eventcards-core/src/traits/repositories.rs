//! Repository traits (ports) - define the interface for data access
//!
//! One generic [`Repository`] covers every persisted entity. The domain layer
//! defines what it needs, and the infrastructure layer provides the
//! implementation.

use std::fmt;

use async_trait::async_trait;

use crate::entities::{
    Card, CardSummary, CardTemplate, Event, EventSummary, Guest, GuestSummary, NewCard,
    NewCardTemplate, NewEvent, NewGuest,
};
use crate::error::DomainError;
use crate::pagination::ListQuery;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// A persisted entity with an integer surrogate key
pub trait Entity: Clone + Send + Sync + 'static {
    /// Client-supplied fields used to create a row
    type Draft: Clone + Send + Sync + 'static;
    /// Item type returned by list queries
    type Summary: Send + Sync + 'static;
    /// Owner filter applied to list queries
    type Scope: Copy + Send + Sync + fmt::Debug + 'static;

    /// Human-readable name used in errors and logs
    const NAME: &'static str;

    fn id(&self) -> i64;
}

impl Entity for Event {
    type Draft = NewEvent;
    type Summary = EventSummary;
    type Scope = ();

    const NAME: &'static str = "Event";

    fn id(&self) -> i64 {
        self.id
    }
}

impl Entity for Guest {
    type Draft = NewGuest;
    type Summary = GuestSummary;
    /// Guests are always listed within one event
    type Scope = i64;

    const NAME: &'static str = "Guest";

    fn id(&self) -> i64 {
        self.id
    }
}

impl Entity for Card {
    type Draft = NewCard;
    type Summary = CardSummary;
    type Scope = ();

    const NAME: &'static str = "Card";

    fn id(&self) -> i64 {
        self.id
    }
}

impl Entity for CardTemplate {
    type Draft = NewCardTemplate;
    type Summary = CardTemplate;
    type Scope = ();

    const NAME: &'static str = "CardTemplate";

    fn id(&self) -> i64 {
        self.id
    }
}

// ============================================================================
// Generic Repository
// ============================================================================

#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    /// Fetch one row by primary key; `DomainError::NotFound` when absent
    async fn get_by_id(&self, id: i64) -> RepoResult<E>;

    /// List one page of rows; an empty page is not an error
    async fn list(&self, scope: E::Scope, query: &ListQuery) -> RepoResult<Vec<E::Summary>>;

    /// Insert a row; id and timestamps are assigned by the store
    async fn create(&self, draft: &E::Draft) -> RepoResult<E>;

    /// Update a row addressed by `entity.id()`
    async fn update(&self, entity: &E) -> RepoResult<E>;

    /// Hard delete by primary key
    async fn delete(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Composite Writes
// ============================================================================

#[async_trait]
pub trait InvitationWriter: Send + Sync {
    /// Create a guest together with a card issued to them, atomically.
    ///
    /// The card's `event_id` and `guest_id` are taken from the new guest.
    async fn create_guest_with_card(
        &self,
        guest: &NewGuest,
        card: &NewCard,
    ) -> RepoResult<(Guest, Card)>;
}
