//! Applies pending database migrations and exits

use anyhow::Context;
use eventcards_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use eventcards_db::{create_pool, resolve_migrations_dir, run_migrations_from};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("Failed to load configuration")?;

    if let Err(e) = try_init_tracing_with_config(&TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {}", e);
    }

    info!(app = %config.app.name, "Connecting to database");
    let pool = create_pool(&config.database)
        .await
        .context("Failed to connect to database")?;

    let dir = resolve_migrations_dir(config.database.migrations_dir.as_deref());
    run_migrations_from(&pool, &dir)
        .await
        .with_context(|| format!("Failed to apply migrations from {}", dir.display()))?;

    info!("Migrations applied");
    Ok(())
}
