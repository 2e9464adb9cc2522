//! Event entity - a gathering with a guest list and printed cards

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::card_template::CardTemplateSummary;
use super::user::UserSummary;

/// Event entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub date: NaiveDate,
    pub location: String,
    /// Number of guests checked in at the door; never negative
    pub scanned_count: i64,
    pub card_template_id: Option<i64>,
    /// Owning user
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// Check whether the given user owns this event
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.user_id == user_id
    }

    /// Check whether a card template has been chosen
    pub fn has_card_template(&self) -> bool {
        self.card_template_id.is_some()
    }
}

/// Client-supplied fields for a new event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub name: String,
    pub date: NaiveDate,
    pub location: String,
    pub card_template_id: Option<i64>,
    pub user_id: i64,
}

impl NewEvent {
    pub fn new(name: impl Into<String>, date: NaiveDate, user_id: i64) -> Self {
        Self {
            name: name.into(),
            date,
            location: String::new(),
            card_template_id: None,
            user_id,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_card_template(mut self, card_template_id: i64) -> Self {
        self.card_template_id = Some(card_template_id);
        self
    }
}

/// Event list item with owner and template projections
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSummary {
    pub id: i64,
    pub name: String,
    pub date: NaiveDate,
    pub location: String,
    pub scanned_count: i64,
    pub created_at: DateTime<Utc>,
    pub owner: Option<UserSummary>,
    pub card_template: Option<CardTemplateSummary>,
}

impl From<&Event> for EventSummary {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id,
            name: event.name.clone(),
            date: event.date,
            location: event.location.clone(),
            scanned_count: event.scanned_count,
            created_at: event.created_at,
            owner: None,
            card_template: None,
        }
    }
}
