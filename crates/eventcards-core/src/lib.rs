//! # eventcards-core
//!
//! Domain layer containing entities, the list query descriptor, and repository traits.
//! This crate has zero dependencies on infrastructure (database, cache, web framework).

pub mod entities;
pub mod error;
pub mod pagination;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{
    Card, CardImage, CardSummary, CardTemplate, CardTemplateSummary, Event, EventSummary, Guest,
    GuestContact, GuestStatus, GuestSummary, GuestType, NewCard, NewCardTemplate, NewEvent,
    NewGuest, UserSummary,
};
pub use error::DomainError;
pub use pagination::{ListDefaults, ListQuery, QueryParseError, SortDirection};
pub use traits::{Entity, InvitationWriter, RepoResult, Repository, Storage, UserCache};
