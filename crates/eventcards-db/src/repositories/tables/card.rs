//! Cards table

use futures::future::BoxFuture;
use futures::FutureExt;
use sqlx::{PgConnection, Postgres, QueryBuilder};

use eventcards_core::entities::{Card, NewCard};
use eventcards_core::traits::RepoResult;

use crate::models::{CardModel, CardSummaryModel};
use crate::repositories::error::map_db_error;
use crate::repositories::table::Table;

impl Table for Card {
    type Model = CardModel;
    type SummaryModel = CardSummaryModel;

    const TABLE: &'static str = "cards";
    const ALIAS: &'static str = "c";
    const COLUMNS: &'static str =
        "id, image_path, event_id, guest_id, card_template_id, created_at, updated_at";
    const LIST_SELECT: &'static str = r"
        SELECT c.id, c.image_path, c.event_id, c.created_at,
               g.id AS guest_id, g.name AS guest_name, g.phone_number AS guest_phone_number
        FROM cards c
        LEFT JOIN guests g ON g.id = c.guest_id";
    const SEARCH_COLUMNS: &'static [&'static str] = &["g.name", "g.phone_number"];

    fn push_insert(qb: &mut QueryBuilder<'_, Postgres>, draft: &NewCard) {
        qb.push("(image_path, event_id, guest_id, card_template_id) VALUES (");
        let mut values = qb.separated(", ");
        values.push_bind(draft.image_path.clone());
        values.push_bind(draft.event_id);
        values.push_bind(draft.guest_id);
        values.push_bind(draft.card_template_id);
        values.push_unseparated(")");
    }

    fn push_assignments(qb: &mut QueryBuilder<'_, Postgres>, card: &Card) {
        let mut set = qb.separated(", ");
        set.push("image_path = ");
        set.push_bind_unseparated(card.image_path.clone());
        set.push("event_id = ");
        set.push_bind_unseparated(card.event_id);
        set.push("guest_id = ");
        set.push_bind_unseparated(card.guest_id);
        set.push("card_template_id = ");
        set.push_bind_unseparated(card.card_template_id);
    }

    fn after_write<'c>(conn: &'c mut PgConnection, card: &'c Card) -> BoxFuture<'c, RepoResult<()>> {
        async move { link_guest(conn, card.id, card.guest_id).await }.boxed()
    }
}

/// Point `guests.card_id` at the card's current holder.
///
/// A guest that held the card before is unlinked first, so a card moved to
/// another guest (or unassigned) leaves no stale back-reference.
async fn link_guest(conn: &mut PgConnection, card_id: i64, guest_id: Option<i64>) -> RepoResult<()> {
    sqlx::query(
        r"
        UPDATE guests
        SET card_id = NULL, updated_at = NOW()
        WHERE card_id = $1 AND id IS DISTINCT FROM $2
        ",
    )
    .bind(card_id)
    .bind(guest_id)
    .execute(&mut *conn)
    .await
    .map_err(map_db_error)?;

    if let Some(guest_id) = guest_id {
        sqlx::query(
            r"
            UPDATE guests
            SET card_id = $1, updated_at = NOW()
            WHERE id = $2 AND card_id IS DISTINCT FROM $1
            ",
        )
        .bind(card_id)
        .bind(guest_id)
        .execute(&mut *conn)
        .await
        .map_err(map_db_error)?;
    }

    Ok(())
}
