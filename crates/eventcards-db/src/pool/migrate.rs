//! Schema migrations applied at runtime from a directory of SQL files

use std::path::{Path, PathBuf};

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::PgPool;
use tracing::info;

/// Migrations shipped with this crate's sources
pub fn migrations_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("migrations")
}

/// The configured directory, or the crate's own when none is set.
///
/// Deployed binaries run away from the source tree, so they set
/// `DATABASE_MIGRATIONS_DIR` to wherever the SQL files were installed.
pub fn resolve_migrations_dir(configured: Option<&str>) -> PathBuf {
    configured.map_or_else(migrations_dir, PathBuf::from)
}

/// Apply every pending migration from the crate's own directory
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    run_migrations_from(pool, migrations_dir()).await
}

/// Apply every pending migration found in `dir`
pub async fn run_migrations_from(pool: &PgPool, dir: impl AsRef<Path>) -> Result<(), MigrateError> {
    let dir = dir.as_ref();
    let migrator = Migrator::new(dir).await?;
    info!(
        dir = %dir.display(),
        count = migrator.iter().count(),
        "Applying database migrations"
    );
    migrator.run(pool).await
}
