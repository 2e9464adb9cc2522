//! Card template entity - a printable background shared across events

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Card template entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardTemplate {
    pub id: i64,
    pub image_path: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Client-supplied fields for a new card template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCardTemplate {
    pub image_path: String,
}

impl NewCardTemplate {
    pub fn new(image_path: impl Into<String>) -> Self {
        Self {
            image_path: image_path.into(),
        }
    }
}

/// Template data embedded in event listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardTemplateSummary {
    pub id: i64,
    pub image_path: String,
}

impl From<&CardTemplate> for CardTemplateSummary {
    fn from(template: &CardTemplate) -> Self {
        Self {
            id: template.id,
            image_path: template.image_path.clone(),
        }
    }
}
