//! Repository implementations
//!
//! A single generic PostgreSQL repository covers events, guests, cards, and
//! card templates. Each entity supplies a `Table` description in `tables`.

mod error;
mod invitation;
mod pg_repository;
mod table;
mod tables;

use eventcards_core::entities::{Card, CardTemplate, Event, Guest};

pub use error::{bounded, like_pattern, map_db_error};
pub use invitation::PgInvitationWriter;
pub use pg_repository::PgRepository;
pub use table::Table;

pub type PgEventRepository = PgRepository<Event>;
pub type PgGuestRepository = PgRepository<Guest>;
pub type PgCardRepository = PgRepository<Card>;
pub type PgCardTemplateRepository = PgRepository<CardTemplate>;
