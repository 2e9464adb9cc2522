//! Request to domain mappers
//!
//! Turns create requests into drafts and folds update requests into a
//! loaded entity. Absent update fields leave the stored value untouched.

use eventcards_core::entities::{
    Card, CardTemplate, Event, Guest, NewCard, NewCardTemplate, NewEvent, NewGuest,
};

use super::requests::{
    CreateCardRequest, CreateCardTemplateRequest, CreateEventRequest, CreateGuestRequest,
    UpdateCardRequest, UpdateCardTemplateRequest, UpdateEventRequest, UpdateGuestRequest,
};

// ============================================================================
// Event Mappers
// ============================================================================

impl CreateEventRequest {
    /// Build the draft for an event owned by `user_id`
    pub fn into_draft(self, user_id: i64) -> NewEvent {
        let mut draft = NewEvent::new(self.name, self.date, user_id);
        if let Some(location) = self.location {
            draft = draft.with_location(location);
        }
        if let Some(template_id) = self.card_template_id {
            draft = draft.with_card_template(template_id);
        }
        draft
    }
}

impl UpdateEventRequest {
    pub fn apply_to(self, event: &mut Event) {
        if let Some(name) = self.name {
            event.name = name;
        }
        if let Some(date) = self.date {
            event.date = date;
        }
        if let Some(location) = self.location {
            event.location = location;
        }
        if let Some(template_id) = self.card_template_id {
            event.card_template_id = Some(template_id);
        }
    }
}

// ============================================================================
// Guest Mappers
// ============================================================================

impl CreateGuestRequest {
    /// Build the draft for a guest of `event_id`
    pub fn into_draft(self, event_id: i64) -> NewGuest {
        let mut draft = NewGuest::new(event_id, self.name);
        if let Some(email) = self.email {
            draft = draft.with_email(email);
        }
        if let Some(phone_number) = self.phone_number {
            draft = draft.with_phone_number(phone_number);
        }
        if let Some(guest_type) = self.guest_type {
            draft = draft.with_type(guest_type);
        }
        draft
    }
}

impl UpdateGuestRequest {
    pub fn apply_to(self, guest: &mut Guest) {
        if let Some(name) = self.name {
            guest.name = name;
        }
        if let Some(email) = self.email {
            guest.email = email;
        }
        if let Some(phone_number) = self.phone_number {
            guest.phone_number = phone_number;
        }
        if let Some(status) = self.status {
            guest.status = status;
        }
        if let Some(guest_type) = self.guest_type {
            guest.guest_type = guest_type;
        }
    }
}

// ============================================================================
// Card Mappers
// ============================================================================

impl From<CreateCardRequest> for NewCard {
    fn from(request: CreateCardRequest) -> Self {
        Self {
            image_path: request.image_path,
            event_id: request.event_id,
            guest_id: request.guest_id,
            card_template_id: request.card_template_id,
        }
    }
}

impl UpdateCardRequest {
    pub fn apply_to(self, card: &mut Card) {
        if let Some(image_path) = self.image_path {
            card.image_path = image_path;
        }
        if let Some(guest_id) = self.guest_id {
            card.guest_id = Some(guest_id);
        }
        if let Some(template_id) = self.card_template_id {
            card.card_template_id = Some(template_id);
        }
    }
}

// ============================================================================
// Card Template Mappers
// ============================================================================

impl From<CreateCardTemplateRequest> for NewCardTemplate {
    fn from(request: CreateCardTemplateRequest) -> Self {
        Self::new(request.image_path)
    }
}

impl UpdateCardTemplateRequest {
    pub fn apply_to(self, template: &mut CardTemplate) {
        template.image_path = self.image_path;
    }
}
