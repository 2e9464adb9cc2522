//! Business logic services
//!
//! Each service borrows the [`ServiceContext`] for one call: raw listing
//! parameters and request DTOs are validated here before any repository runs.

pub mod card;
pub mod card_template;
pub mod context;
pub mod error;
pub mod event;
pub mod guest;

pub use card::CardService;
pub use card_template::CardTemplateService;
pub use context::ServiceContext;
pub use error::{ServiceError, ServiceResult};
pub use event::EventService;
pub use guest::GuestService;
