//! Card entity - a printable invitation image, optionally issued to a guest

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::guest::GuestContact;

/// Card entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: i64,
    pub image_path: String,
    pub event_id: i64,
    /// Cards may be printed before they are assigned
    pub guest_id: Option<i64>,
    pub card_template_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Card {
    /// Check if the card has been assigned to a guest
    pub fn is_assigned(&self) -> bool {
        self.guest_id.is_some()
    }
}

/// Client-supplied fields for a new card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCard {
    pub image_path: String,
    pub event_id: i64,
    pub guest_id: Option<i64>,
    pub card_template_id: Option<i64>,
}

impl NewCard {
    pub fn new(event_id: i64, image_path: impl Into<String>) -> Self {
        Self {
            image_path: image_path.into(),
            event_id,
            guest_id: None,
            card_template_id: None,
        }
    }

    pub fn for_guest(mut self, guest_id: i64) -> Self {
        self.guest_id = Some(guest_id);
        self
    }

    pub fn with_card_template(mut self, card_template_id: i64) -> Self {
        self.card_template_id = Some(card_template_id);
        self
    }
}

/// Card image embedded in guest listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardImage {
    pub id: i64,
    pub image_path: String,
}

/// Card list item with the assigned guest's contact details, if any
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSummary {
    pub id: i64,
    pub image_path: String,
    pub event_id: i64,
    pub created_at: DateTime<Utc>,
    pub guest: Option<GuestContact>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_card_is_unassigned_by_default() {
        let draft = NewCard::new(1, "/cards/1.png");
        assert!(draft.guest_id.is_none());

        let draft = draft.for_guest(12).with_card_template(4);
        assert_eq!(draft.guest_id, Some(12));
        assert_eq!(draft.card_template_id, Some(4));
    }
}
