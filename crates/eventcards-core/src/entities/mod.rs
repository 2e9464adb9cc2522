//! Domain entities - core business objects

mod card;
mod card_template;
mod event;
mod guest;
mod user;

pub use card::{Card, CardImage, CardSummary, NewCard};
pub use card_template::{CardTemplate, CardTemplateSummary, NewCardTemplate};
pub use event::{Event, EventSummary, NewEvent};
pub use guest::{Guest, GuestContact, GuestStatus, GuestSummary, GuestType, NewGuest};
pub use user::UserSummary;
