//! Card template database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for card_templates table
#[derive(Debug, Clone, FromRow)]
pub struct CardTemplateModel {
    pub id: i64,
    pub image_path: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
