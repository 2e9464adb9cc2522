//! Per-entity table descriptions consumed by [`PgRepository`](super::PgRepository)

use futures::future::BoxFuture;
use futures::FutureExt;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgConnection, Postgres, QueryBuilder};

use eventcards_core::traits::{Entity, RepoResult};

/// How an entity is stored: table, columns, list joins, and column binders.
///
/// Implementations push SQL fragments with owned bind values; the generic
/// repository assembles the full statements.
pub trait Table: Entity {
    /// Row selected by `get_by_id` and returned by writes
    type Model: for<'r> FromRow<'r, PgRow> + Send + Unpin + Into<Self>;
    /// Row produced by the list query
    type SummaryModel: for<'r> FromRow<'r, PgRow> + Send + Unpin + Into<Self::Summary>;

    const TABLE: &'static str;
    /// Alias of the base table inside `LIST_SELECT`
    const ALIAS: &'static str;
    /// Unqualified column list, also used for `RETURNING`
    const COLUMNS: &'static str;
    /// `SELECT ... FROM <table> <alias> [LEFT JOIN ...]`, without a WHERE clause
    const LIST_SELECT: &'static str;
    /// Columns matched against the search term, qualified by alias
    const SEARCH_COLUMNS: &'static [&'static str];

    /// Append owner predicates, each starting with ` AND `
    fn push_scope(_qb: &mut QueryBuilder<'_, Postgres>, _scope: Self::Scope) {}

    /// Append `(columns) VALUES (binds)`
    fn push_insert(qb: &mut QueryBuilder<'_, Postgres>, draft: &Self::Draft);

    /// Append `col = bind, ...` for every mutable column
    fn push_assignments(qb: &mut QueryBuilder<'_, Postgres>, entity: &Self);

    /// Keep dependent rows in step with a row just inserted or updated.
    /// Runs on the same transaction as the write.
    fn after_write<'c>(_conn: &'c mut PgConnection, _row: &'c Self) -> BoxFuture<'c, RepoResult<()>> {
        async { Ok(()) }.boxed()
    }
}
