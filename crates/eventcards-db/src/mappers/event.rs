//! Event model -> entity mapper

use eventcards_core::entities::{CardTemplateSummary, Event, EventSummary, UserSummary};

use crate::models::{EventModel, EventSummaryModel};

impl From<EventModel> for Event {
    fn from(model: EventModel) -> Self {
        Event {
            id: model.id,
            name: model.name,
            date: model.date,
            location: model.location,
            scanned_count: model.scanned_count,
            card_template_id: model.card_template_id,
            user_id: model.user_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<EventSummaryModel> for EventSummary {
    fn from(model: EventSummaryModel) -> Self {
        let owner = model
            .username
            .map(|username| UserSummary::new(model.user_id, username));
        let card_template = model
            .card_template_id
            .zip(model.card_template_image_path)
            .map(|(id, image_path)| CardTemplateSummary { id, image_path });

        EventSummary {
            id: model.id,
            name: model.name,
            date: model.date,
            location: model.location,
            scanned_count: model.scanned_count,
            created_at: model.created_at,
            owner,
            card_template,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    fn summary_model() -> EventSummaryModel {
        EventSummaryModel {
            id: 5,
            name: "Wedding".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 9, 12).unwrap(),
            location: "Garden".to_string(),
            scanned_count: 3,
            created_at: Utc::now(),
            user_id: 11,
            username: Some("alice".to_string()),
            card_template_id: Some(2),
            card_template_image_path: Some("templates/floral.png".to_string()),
        }
    }

    #[test]
    fn test_summary_with_joins() {
        let summary = EventSummary::from(summary_model());
        assert_eq!(summary.owner, Some(UserSummary::new(11, "alice")));
        assert_eq!(summary.card_template.unwrap().image_path, "templates/floral.png");
    }

    #[test]
    fn test_summary_without_template() {
        let model = EventSummaryModel {
            card_template_id: None,
            card_template_image_path: None,
            ..summary_model()
        };
        let summary = EventSummary::from(model);
        assert!(summary.card_template.is_none());
        assert!(summary.owner.is_some());
    }
}
