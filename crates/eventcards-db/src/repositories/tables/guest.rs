//! Guests table
//!
//! `event_id` is written once at insert and never reassigned.

use sqlx::{Postgres, QueryBuilder};

use eventcards_core::entities::{Guest, NewGuest};

use crate::models::{GuestModel, GuestSummaryModel};
use crate::repositories::table::Table;

impl Table for Guest {
    type Model = GuestModel;
    type SummaryModel = GuestSummaryModel;

    const TABLE: &'static str = "guests";
    const ALIAS: &'static str = "g";
    const COLUMNS: &'static str =
        "id, name, email, phone_number, status, type, card_id, event_id, created_at, updated_at";
    const LIST_SELECT: &'static str = r"
        SELECT g.id, g.name, g.email, g.phone_number, g.status, g.type, g.event_id, g.created_at,
               c.id AS card_id, c.image_path AS card_image_path
        FROM guests g
        LEFT JOIN cards c ON c.id = g.card_id";
    const SEARCH_COLUMNS: &'static [&'static str] = &["g.name", "g.phone_number", "g.email"];

    fn push_scope(qb: &mut QueryBuilder<'_, Postgres>, event_id: i64) {
        qb.push(" AND g.event_id = ");
        qb.push_bind(event_id);
    }

    fn push_insert(qb: &mut QueryBuilder<'_, Postgres>, draft: &NewGuest) {
        qb.push("(name, email, phone_number, status, type, event_id) VALUES (");
        let mut values = qb.separated(", ");
        values.push_bind(draft.name.clone());
        values.push_bind(draft.email.clone());
        values.push_bind(draft.phone_number.clone());
        values.push_bind(draft.status.as_str());
        values.push_bind(draft.guest_type.as_str());
        values.push_bind(draft.event_id);
        values.push_unseparated(")");
    }

    fn push_assignments(qb: &mut QueryBuilder<'_, Postgres>, guest: &Guest) {
        let mut set = qb.separated(", ");
        set.push("name = ");
        set.push_bind_unseparated(guest.name.clone());
        set.push("email = ");
        set.push_bind_unseparated(guest.email.clone());
        set.push("phone_number = ");
        set.push_bind_unseparated(guest.phone_number.clone());
        set.push("status = ");
        set.push_bind_unseparated(guest.status.as_str());
        set.push("type = ");
        set.push_bind_unseparated(guest.guest_type.as_str());
        set.push("card_id = ");
        set.push_bind_unseparated(guest.card_id);
    }
}
