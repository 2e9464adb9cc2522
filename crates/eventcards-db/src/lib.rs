//! # eventcards-db
//!
//! Database layer implementing the repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides the PostgreSQL side of `eventcards-core`. It handles:
//!
//! - Connection pool management and schema migrations
//! - Database models with SQLx `FromRow` derives
//! - Model -> entity mappers
//! - One generic repository plus the transactional write coordinator
//!
//! ## Usage
//!
//! ```rust,ignore
//! use eventcards_common::AppConfig;
//! use eventcards_db::{create_pool, new_storage};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::from_env()?;
//!     let pool = create_pool(&config.database).await?;
//!     let storage = new_storage(pool, &config.database);
//!
//!     let event = storage.events.get_by_id(1).await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;
pub mod storage;
pub mod transaction;

// Re-export commonly used types
pub use pool::{create_pool, resolve_migrations_dir, run_migrations, run_migrations_from, PgPool};
pub use repositories::{
    PgCardRepository, PgCardTemplateRepository, PgEventRepository, PgGuestRepository,
    PgInvitationWriter, PgRepository,
};
pub use storage::new_storage;
pub use transaction::{run_in_transaction, run_with_deadline, PgTx, TxControl, WriteCoordinator};
