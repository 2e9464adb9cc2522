//! Generic PostgreSQL repository
//!
//! One implementation of [`Repository`] serves every entity; the statements
//! are assembled from the entity's [`Table`] description.

use std::marker::PhantomData;
use std::time::Duration;

use async_trait::async_trait;
use futures::FutureExt;
use sqlx::{PgConnection, PgPool, Postgres, QueryBuilder};
use tracing::instrument;

use eventcards_core::error::DomainError;
use eventcards_core::pagination::ListQuery;
use eventcards_core::traits::{RepoResult, Repository};

use crate::transaction::WriteCoordinator;

use super::error::{bounded, like_pattern, map_db_error};
use super::table::Table;

/// PostgreSQL implementation of `Repository<T>`
pub struct PgRepository<T> {
    coordinator: WriteCoordinator,
    _table: PhantomData<fn() -> T>,
}

impl<T> Clone for PgRepository<T> {
    fn clone(&self) -> Self {
        Self {
            coordinator: self.coordinator.clone(),
            _table: PhantomData,
        }
    }
}

impl<T: Table> PgRepository<T> {
    /// Create a repository whose calls are each bounded by `timeout`.
    ///
    /// A write's deadline covers its whole transaction, including any
    /// linked rows and the commit.
    pub fn new(pool: PgPool, timeout: Duration) -> Self {
        Self::with_coordinator(WriteCoordinator::new(pool, timeout))
    }

    pub fn with_coordinator(coordinator: WriteCoordinator) -> Self {
        Self {
            coordinator,
            _table: PhantomData,
        }
    }

    fn pool(&self) -> &PgPool {
        self.coordinator.pool()
    }

    fn timeout(&self) -> Duration {
        self.coordinator.timeout()
    }
}

#[async_trait]
impl<T: Table> Repository<T> for PgRepository<T> {
    #[instrument(skip(self), fields(entity = T::NAME))]
    async fn get_by_id(&self, id: i64) -> RepoResult<T> {
        fetch_by_id::<T>(self.pool(), id, self.timeout()).await
    }

    #[instrument(skip(self, query), fields(entity = T::NAME, limit = query.limit, offset = query.offset))]
    async fn list(&self, scope: T::Scope, query: &ListQuery) -> RepoResult<Vec<T::Summary>> {
        let mut qb = build_list_query::<T>(scope, query);
        let rows = bounded(
            self.timeout(),
            qb.build_query_as::<T::SummaryModel>().fetch_all(self.pool()),
        )
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    #[instrument(skip(self, draft), fields(entity = T::NAME))]
    async fn create(&self, draft: &T::Draft) -> RepoResult<T> {
        let draft = draft.clone();
        self.coordinator
            .run(move |tx| {
                async move { insert::<T>(tx.conn(), &draft).await }.boxed()
            })
            .await
    }

    #[instrument(skip(self, entity), fields(entity = T::NAME, id = entity.id()))]
    async fn update(&self, entity: &T) -> RepoResult<T> {
        let entity = entity.clone();
        self.coordinator
            .run(move |tx| {
                async move { update_row::<T>(tx.conn(), &entity).await }.boxed()
            })
            .await
    }

    #[instrument(skip(self), fields(entity = T::NAME))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let sql = format!("DELETE FROM {} WHERE id = $1", T::TABLE);
        let result = bounded(
            self.timeout(),
            sqlx::query(&sql).bind(id).execute(self.pool()),
        )
        .await?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(T::NAME, id));
        }

        Ok(())
    }
}

async fn fetch_by_id<T: Table>(pool: &PgPool, id: i64, timeout: Duration) -> RepoResult<T> {
    let sql = format!("SELECT {} FROM {} WHERE id = $1", T::COLUMNS, T::TABLE);
    let row = bounded(
        timeout,
        sqlx::query_as::<_, T::Model>(&sql)
            .bind(id)
            .fetch_optional(pool),
    )
    .await?;

    row.map(Into::into)
        .ok_or_else(|| DomainError::not_found(T::NAME, id))
}

/// Assemble the list statement: scope, optional search, stable ordering, page window
pub(crate) fn build_list_query<T: Table>(
    scope: T::Scope,
    query: &ListQuery,
) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(T::LIST_SELECT);
    qb.push(" WHERE TRUE");
    T::push_scope(&mut qb, scope);

    if query.has_search() && !T::SEARCH_COLUMNS.is_empty() {
        let pattern = like_pattern(&query.search);
        qb.push(" AND (");
        let mut any = qb.separated(" OR ");
        for column in T::SEARCH_COLUMNS {
            any.push(format!("{column} ILIKE "));
            any.push_bind_unseparated(pattern.clone());
        }
        qb.push(")");
    }

    let direction = query.sort.as_sql();
    qb.push(format!(
        " ORDER BY {alias}.created_at {direction}, {alias}.id {direction}",
        alias = T::ALIAS,
    ));
    qb.push(" LIMIT ");
    qb.push_bind(query.limit);
    qb.push(" OFFSET ");
    qb.push_bind(query.offset);
    qb
}

/// Insert a row inside an open transaction, returning the stored entity
pub(crate) async fn insert<T: Table>(conn: &mut PgConnection, draft: &T::Draft) -> RepoResult<T> {
    let mut qb = QueryBuilder::<Postgres>::new(format!("INSERT INTO {} ", T::TABLE));
    T::push_insert(&mut qb, draft);
    qb.push(format!(" RETURNING {}", T::COLUMNS));

    let row = qb
        .build_query_as::<T::Model>()
        .fetch_one(&mut *conn)
        .await
        .map_err(map_db_error)?;

    let entity: T = row.into();
    T::after_write(conn, &entity).await?;
    Ok(entity)
}

/// Update a row inside an open transaction; `NotFound` when no row matched
pub(crate) async fn update_row<T: Table>(conn: &mut PgConnection, entity: &T) -> RepoResult<T> {
    let mut qb = QueryBuilder::<Postgres>::new(format!("UPDATE {} SET ", T::TABLE));
    T::push_assignments(&mut qb, entity);
    qb.push(", updated_at = NOW() WHERE id = ");
    qb.push_bind(entity.id());
    qb.push(format!(" RETURNING {}", T::COLUMNS));

    let row = qb
        .build_query_as::<T::Model>()
        .fetch_optional(&mut *conn)
        .await
        .map_err(map_db_error)?;

    let updated: T = row
        .map(Into::into)
        .ok_or_else(|| DomainError::not_found(T::NAME, entity.id()))?;
    T::after_write(conn, &updated).await?;
    Ok(updated)
}

/// Select a row inside an open transaction
pub(crate) async fn select_by_id<T: Table>(conn: &mut PgConnection, id: i64) -> RepoResult<T> {
    let sql = format!("SELECT {} FROM {} WHERE id = $1", T::COLUMNS, T::TABLE);
    let row = sqlx::query_as::<_, T::Model>(&sql)
        .bind(id)
        .fetch_optional(conn)
        .await
        .map_err(map_db_error)?;

    row.map(Into::into)
        .ok_or_else(|| DomainError::not_found(T::NAME, id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventcards_core::entities::{Card, CardTemplate, Event, Guest};
    use eventcards_core::pagination::SortDirection;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgRepository<Event>>();
        assert_send_sync::<PgRepository<Guest>>();
        assert_send_sync::<PgRepository<Card>>();
        assert_send_sync::<PgRepository<CardTemplate>>();
    }

    #[test]
    fn test_list_without_search_has_no_like() {
        let qb = build_list_query::<Event>((), &ListQuery::default());
        let sql = qb.sql();

        assert!(!sql.contains("ILIKE"));
        assert!(sql.ends_with("ORDER BY e.created_at DESC, e.id DESC LIMIT $1 OFFSET $2"));
    }

    #[test]
    fn test_list_search_is_a_disjunction_over_search_columns() {
        let query = ListQuery::new(10, 0)
            .with_sort(SortDirection::Asc)
            .with_search("gala");
        let qb = build_list_query::<Event>((), &query);
        let sql = qb.sql();

        assert!(sql.contains(
            "AND (e.name ILIKE $1 OR e.location ILIKE $2 OR u.username ILIKE $3)"
        ));
        assert!(sql.contains("ORDER BY e.created_at ASC, e.id ASC LIMIT $4 OFFSET $5"));
    }

    #[test]
    fn test_guest_list_is_scoped_to_event() {
        let qb = build_list_query::<Guest>(42, &ListQuery::default());
        let sql = qb.sql();

        assert!(sql.contains("LEFT JOIN cards c"));
        assert!(sql.contains("WHERE TRUE AND g.event_id = $1"));
        assert!(sql.contains("LIMIT $2 OFFSET $3"));
    }

    #[test]
    fn test_card_template_list_has_no_joins() {
        let query = ListQuery::default().with_search("floral");
        let qb = build_list_query::<CardTemplate>((), &query);
        let sql = qb.sql();

        assert!(!sql.contains("JOIN"));
        assert!(sql.contains("AND (ct.image_path ILIKE $1)"));
    }

    #[test]
    fn test_card_list_searches_guest_columns() {
        let query = ListQuery::default().with_search("ann");
        let qb = build_list_query::<Card>((), &query);
        let sql = qb.sql();

        assert!(sql.contains("LEFT JOIN guests g"));
        assert!(sql.contains("AND (g.name ILIKE $1 OR g.phone_number ILIKE $2)"));
    }
}
