//! Event database models

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

/// Database model for events table
#[derive(Debug, Clone, FromRow)]
pub struct EventModel {
    pub id: i64,
    pub name: String,
    pub date: NaiveDate,
    pub location: String,
    pub scanned_count: i64,
    pub card_template_id: Option<i64>,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Event row joined with its owner and card template
#[derive(Debug, Clone, FromRow)]
pub struct EventSummaryModel {
    pub id: i64,
    pub name: String,
    pub date: NaiveDate,
    pub location: String,
    pub scanned_count: i64,
    pub created_at: DateTime<Utc>,
    pub user_id: i64,
    pub username: Option<String>,
    pub card_template_id: Option<i64>,
    pub card_template_image_path: Option<String>,
}
