//! Card templates table

use sqlx::{Postgres, QueryBuilder};

use eventcards_core::entities::{CardTemplate, NewCardTemplate};

use crate::models::CardTemplateModel;
use crate::repositories::table::Table;

impl Table for CardTemplate {
    type Model = CardTemplateModel;
    type SummaryModel = CardTemplateModel;

    const TABLE: &'static str = "card_templates";
    const ALIAS: &'static str = "ct";
    const COLUMNS: &'static str = "id, image_path, created_at, updated_at";
    const LIST_SELECT: &'static str =
        "SELECT ct.id, ct.image_path, ct.created_at, ct.updated_at FROM card_templates ct";
    const SEARCH_COLUMNS: &'static [&'static str] = &["ct.image_path"];

    fn push_insert(qb: &mut QueryBuilder<'_, Postgres>, draft: &NewCardTemplate) {
        qb.push("(image_path) VALUES (");
        qb.push_bind(draft.image_path.clone());
        qb.push(")");
    }

    fn push_assignments(qb: &mut QueryBuilder<'_, Postgres>, template: &CardTemplate) {
        qb.push("image_path = ");
        qb.push_bind(template.image_path.clone());
    }
}
