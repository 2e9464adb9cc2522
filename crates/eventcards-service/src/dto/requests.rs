//! Request DTOs for write operations
//!
//! All request DTOs implement `Deserialize` and `Validate`; services call
//! `validate()` before touching a repository.

use chrono::NaiveDate;
use eventcards_core::entities::{GuestStatus, GuestType};
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Event Requests
// ============================================================================

/// Create event request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEventRequest {
    #[validate(length(min = 1, max = 255, message = "Event name must be 1-255 characters"))]
    pub name: String,

    pub date: NaiveDate,

    #[validate(length(max = 255, message = "Location must be at most 255 characters"))]
    pub location: Option<String>,

    pub card_template_id: Option<i64>,
}

/// Update event request; absent fields keep their stored value
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateEventRequest {
    #[validate(length(min = 1, max = 255, message = "Event name must be 1-255 characters"))]
    pub name: Option<String>,

    pub date: Option<NaiveDate>,

    #[validate(length(max = 255, message = "Location must be at most 255 characters"))]
    pub location: Option<String>,

    pub card_template_id: Option<i64>,
}

// ============================================================================
// Guest Requests
// ============================================================================

/// Create guest request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateGuestRequest {
    #[validate(length(min = 1, max = 255, message = "Guest name must be 1-255 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(length(max = 64, message = "Phone number must be at most 64 characters"))]
    pub phone_number: Option<String>,

    #[serde(rename = "type")]
    pub guest_type: Option<GuestType>,
}

/// Update guest request; the owning event cannot be changed
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateGuestRequest {
    #[validate(length(min = 1, max = 255, message = "Guest name must be 1-255 characters"))]
    pub name: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(length(max = 64, message = "Phone number must be at most 64 characters"))]
    pub phone_number: Option<String>,

    pub status: Option<GuestStatus>,

    #[serde(rename = "type")]
    pub guest_type: Option<GuestType>,
}

/// Add a guest together with the card issued to them
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct InviteGuestRequest {
    #[validate(nested)]
    pub guest: CreateGuestRequest,

    #[validate(length(min = 1, max = 1024, message = "Image path must be 1-1024 characters"))]
    pub image_path: String,

    pub card_template_id: Option<i64>,
}

// ============================================================================
// Card Requests
// ============================================================================

/// Create card request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCardRequest {
    #[validate(range(min = 1, message = "Invalid event id"))]
    pub event_id: i64,

    pub guest_id: Option<i64>,

    pub card_template_id: Option<i64>,

    #[validate(length(min = 1, max = 1024, message = "Image path must be 1-1024 characters"))]
    pub image_path: String,
}

/// Update card request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCardRequest {
    #[validate(length(min = 1, max = 1024, message = "Image path must be 1-1024 characters"))]
    pub image_path: Option<String>,

    pub guest_id: Option<i64>,

    pub card_template_id: Option<i64>,
}

// ============================================================================
// Card Template Requests
// ============================================================================

/// Create card template request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCardTemplateRequest {
    #[validate(length(min = 1, max = 1024, message = "Image path must be 1-1024 characters"))]
    pub image_path: String,
}

/// Update card template request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCardTemplateRequest {
    #[validate(length(min = 1, max = 1024, message = "Image path must be 1-1024 characters"))]
    pub image_path: String,
}
