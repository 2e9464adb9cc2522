//! Events table

use sqlx::{Postgres, QueryBuilder};

use eventcards_core::entities::{Event, NewEvent};

use crate::models::{EventModel, EventSummaryModel};
use crate::repositories::table::Table;

impl Table for Event {
    type Model = EventModel;
    type SummaryModel = EventSummaryModel;

    const TABLE: &'static str = "events";
    const ALIAS: &'static str = "e";
    const COLUMNS: &'static str =
        "id, name, date, location, scanned_count, card_template_id, user_id, created_at, updated_at";
    const LIST_SELECT: &'static str = r"
        SELECT e.id, e.name, e.date, e.location, e.scanned_count, e.created_at,
               e.user_id, u.username,
               e.card_template_id, ct.image_path AS card_template_image_path
        FROM events e
        LEFT JOIN card_templates ct ON ct.id = e.card_template_id
        LEFT JOIN users u ON u.id = e.user_id";
    const SEARCH_COLUMNS: &'static [&'static str] = &["e.name", "e.location", "u.username"];

    fn push_insert(qb: &mut QueryBuilder<'_, Postgres>, draft: &NewEvent) {
        qb.push("(name, date, location, card_template_id, user_id) VALUES (");
        let mut values = qb.separated(", ");
        values.push_bind(draft.name.clone());
        values.push_bind(draft.date);
        values.push_bind(draft.location.clone());
        values.push_bind(draft.card_template_id);
        values.push_bind(draft.user_id);
        values.push_unseparated(")");
    }

    // scanned_count is left out: it is advanced by check-ins, never by a
    // read-modify-write of the whole row
    fn push_assignments(qb: &mut QueryBuilder<'_, Postgres>, event: &Event) {
        let mut set = qb.separated(", ");
        set.push("name = ");
        set.push_bind_unseparated(event.name.clone());
        set.push("date = ");
        set.push_bind_unseparated(event.date);
        set.push("location = ");
        set.push_bind_unseparated(event.location.clone());
        set.push("card_template_id = ");
        set.push_bind_unseparated(event.card_template_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    #[test]
    fn test_update_leaves_scanned_count_alone() {
        let now = Utc::now();
        let event = Event {
            id: 1,
            name: "Gala".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 9, 12).unwrap(),
            location: "Hall".to_string(),
            scanned_count: 12,
            card_template_id: None,
            user_id: 1,
            created_at: now,
            updated_at: now,
        };

        let mut qb = QueryBuilder::<Postgres>::new("UPDATE events SET ");
        Event::push_assignments(&mut qb, &event);
        let sql = qb.sql();

        assert!(!sql.contains("scanned_count"));
        assert_eq!(
            sql,
            "UPDATE events SET name = $1, date = $2, location = $3, card_template_id = $4"
        );
    }
}
