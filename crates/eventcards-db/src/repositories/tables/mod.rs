//! `Table` descriptions for each persisted entity

mod card;
mod card_template;
mod event;
mod guest;
