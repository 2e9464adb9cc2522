//! Transactional write coordinator
//!
//! Every create and update runs inside [`WriteCoordinator::run`]: the unit of
//! work receives the open transaction, and the coordinator commits on success
//! or rolls back on failure. One deadline covers the whole call, from BEGIN
//! through COMMIT.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use futures::future::BoxFuture;
use sqlx::{PgConnection, PgPool, Postgres, Transaction};
use tracing::{instrument, warn};

use eventcards_core::error::DomainError;
use eventcards_core::traits::RepoResult;

use crate::repositories::map_db_error;

/// Commit/rollback control over an open transaction
#[async_trait]
pub trait TxControl: Send + Sized {
    async fn commit(self) -> RepoResult<()>;
    async fn rollback(self) -> RepoResult<()>;
}

/// Run `work` inside `tx`, committing on success and rolling back on failure.
///
/// A failed rollback is logged and dropped; the error returned is always the
/// one produced by `work`. A failed commit is returned as is.
pub async fn run_in_transaction<Tx, F, R>(mut tx: Tx, work: F) -> RepoResult<R>
where
    Tx: TxControl,
    F: for<'t> FnOnce(&'t mut Tx) -> BoxFuture<'t, RepoResult<R>> + Send,
    R: Send,
{
    match work(&mut tx).await {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = tx.rollback().await {
                warn!(error = %rollback_err, cause = %err, "Transaction rollback failed");
            }
            Err(err)
        }
    }
}

/// Open a transaction with `begin` and run `work` in it, all under `limit`.
///
/// On expiry the pending future is dropped along with the transaction, which
/// rolls it back, and the caller gets `QueryTimeout`.
pub async fn run_with_deadline<Tx, B, F, R>(limit: Duration, begin: B, work: F) -> RepoResult<R>
where
    Tx: TxControl,
    B: Future<Output = RepoResult<Tx>> + Send,
    F: for<'t> FnOnce(&'t mut Tx) -> BoxFuture<'t, RepoResult<R>> + Send,
    R: Send,
{
    let attempt = async move {
        let tx = begin.await?;
        run_in_transaction(tx, work).await
    };

    match tokio::time::timeout(limit, attempt).await {
        Ok(result) => result,
        Err(_) => Err(DomainError::QueryTimeout(limit)),
    }
}

/// An open PostgreSQL transaction
pub struct PgTx {
    tx: Transaction<'static, Postgres>,
}

impl PgTx {
    /// Connection to run statements on
    pub fn conn(&mut self) -> &mut PgConnection {
        &mut self.tx
    }
}

#[async_trait]
impl TxControl for PgTx {
    async fn commit(self) -> RepoResult<()> {
        self.tx.commit().await.map_err(map_db_error)
    }

    async fn rollback(self) -> RepoResult<()> {
        self.tx.rollback().await.map_err(map_db_error)
    }
}

/// Opens transactions on the shared pool
#[derive(Clone)]
pub struct WriteCoordinator {
    pool: PgPool,
    timeout: Duration,
}

impl WriteCoordinator {
    pub fn new(pool: PgPool, timeout: Duration) -> Self {
        Self { pool, timeout }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Begin a transaction and run `work` inside it, bounded by the
    /// coordinator's timeout as a whole
    #[instrument(skip_all)]
    pub async fn run<F, R>(&self, work: F) -> RepoResult<R>
    where
        F: for<'t> FnOnce(&'t mut PgTx) -> BoxFuture<'t, RepoResult<R>> + Send,
        R: Send,
    {
        let begin = async {
            let tx = self.pool.begin().await.map_err(map_db_error)?;
            Ok::<_, DomainError>(PgTx { tx })
        };
        run_with_deadline(self.timeout, begin, work).await
    }
}
