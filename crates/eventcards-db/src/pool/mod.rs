//! Database connection pool and schema migrations

mod migrate;
mod postgres;

pub use migrate::{migrations_dir, resolve_migrations_dir, run_migrations, run_migrations_from};
pub use postgres::{create_pool, create_pool_with, PoolOptions};

// Re-export PgPool for convenience
pub use sqlx::postgres::PgPool;
