//! Database models - SQLx-compatible structs for PostgreSQL tables
//!
//! `*Model` structs mirror a table row; `*SummaryModel` structs mirror the
//! joined rows produced by list queries.

mod card;
mod card_template;
mod event;
mod guest;

pub use card::{CardModel, CardSummaryModel};
pub use card_template::CardTemplateModel;
pub use event::{EventModel, EventSummaryModel};
pub use guest::{GuestModel, GuestSummaryModel};
