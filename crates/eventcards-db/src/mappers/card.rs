//! Card model -> entity mapper

use eventcards_core::entities::{Card, CardSummary, GuestContact};

use crate::models::{CardModel, CardSummaryModel};

impl From<CardModel> for Card {
    fn from(model: CardModel) -> Self {
        Card {
            id: model.id,
            image_path: model.image_path,
            event_id: model.event_id,
            guest_id: model.guest_id,
            card_template_id: model.card_template_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<CardSummaryModel> for CardSummary {
    fn from(model: CardSummaryModel) -> Self {
        let guest = match (model.guest_id, model.guest_name) {
            (Some(id), Some(name)) => Some(GuestContact {
                id,
                name,
                phone_number: model.guest_phone_number.unwrap_or_default(),
            }),
            _ => None,
        };

        CardSummary {
            id: model.id,
            image_path: model.image_path,
            event_id: model.event_id,
            created_at: model.created_at,
            guest,
        }
    }
}
