//! Guest model -> entity mapper

use eventcards_core::entities::{CardImage, Guest, GuestStatus, GuestSummary, GuestType};

use crate::models::{GuestModel, GuestSummaryModel};

/// Convert database status string, falling back to the default on unknown values
fn parse_status(value: &str) -> GuestStatus {
    value.parse().unwrap_or_default()
}

fn parse_type(value: &str) -> GuestType {
    value.parse().unwrap_or_default()
}

impl From<GuestModel> for Guest {
    fn from(model: GuestModel) -> Self {
        Guest {
            id: model.id,
            name: model.name,
            email: model.email,
            phone_number: model.phone_number,
            status: parse_status(&model.status),
            guest_type: parse_type(&model.guest_type),
            card_id: model.card_id,
            event_id: model.event_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<GuestSummaryModel> for GuestSummary {
    fn from(model: GuestSummaryModel) -> Self {
        let card = model
            .card_id
            .zip(model.card_image_path)
            .map(|(id, image_path)| CardImage { id, image_path });

        GuestSummary {
            id: model.id,
            name: model.name,
            email: model.email,
            phone_number: model.phone_number,
            status: parse_status(&model.status),
            guest_type: parse_type(&model.guest_type),
            event_id: model.event_id,
            created_at: model.created_at,
            card,
        }
    }
}
