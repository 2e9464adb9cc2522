//! Card database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for cards table
#[derive(Debug, Clone, FromRow)]
pub struct CardModel {
    pub id: i64,
    pub image_path: String,
    pub event_id: i64,
    pub guest_id: Option<i64>,
    pub card_template_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Card row joined with the guest holding it
#[derive(Debug, Clone, FromRow)]
pub struct CardSummaryModel {
    pub id: i64,
    pub image_path: String,
    pub event_id: i64,
    pub created_at: DateTime<Utc>,
    pub guest_id: Option<i64>,
    pub guest_name: Option<String>,
    pub guest_phone_number: Option<String>,
}
