//! Model to entity mappers
//!
//! `From<Model> for Entity` conversions turn database rows into domain objects.
//! List rows carry nullable joined columns; a projection is attached only when
//! the joined row exists.

mod card;
mod card_template;
mod event;
mod guest;
