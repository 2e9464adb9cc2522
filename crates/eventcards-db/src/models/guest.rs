//! Guest database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for guests table
#[derive(Debug, Clone, FromRow)]
pub struct GuestModel {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub status: String,
    #[sqlx(rename = "type")]
    pub guest_type: String,
    pub card_id: Option<i64>,
    pub event_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Guest row joined with the card issued to it
#[derive(Debug, Clone, FromRow)]
pub struct GuestSummaryModel {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub status: String,
    #[sqlx(rename = "type")]
    pub guest_type: String,
    pub event_id: i64,
    pub created_at: DateTime<Utc>,
    pub card_id: Option<i64>,
    pub card_image_path: Option<String>,
}
