//! Database migration command.
//!
//! # Usage
//!
//! ```bash
//! vs-cli migrate
//! ```
//!
//! # Environment Variables
//!
//! - `STOREFRONT_DATABASE_URL` - `PostgreSQL` connection string (or `DATABASE_URL`)
//!
//! # Migration Files
//!
//! Embedded from `crates/storefront/migrations/`:
//! ```text
//! migrations/
//! ├── 20260301000001_create_user_accounts.sql
//! └── 20260301000002_create_customers.sql
//! ```

use videoshop_storefront::db;

use super::{CommandError, connect};

/// Apply all pending storefront migrations.
///
/// # Errors
///
/// Returns an error if configuration is missing, the database is unreachable,
/// or a migration fails.
pub async fn run() -> Result<(), CommandError> {
    let (_config, pool) = connect().await?;

    tracing::info!("Running storefront migrations...");
    db::run_migrations(&pool).await?;

    tracing::info!("Storefront migrations complete!");
    Ok(())
}
