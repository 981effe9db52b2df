//! Subcommand implementations.

pub mod customers;
pub mod migrate;
pub mod seed;

use sqlx::PgPool;
use thiserror::Error;

use videoshop_core::UsernameError;
use videoshop_storefront::accounts::AccountError;
use videoshop_storefront::config::{ConfigError, StorefrontConfig};
use videoshop_storefront::customers::CustomerError;
use videoshop_storefront::db;
use videoshop_storefront::seed::SeedError;
use videoshop_storefront::services::RegistrationError;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Database connection error.
    #[error("Database connection error: {0}")]
    Database(#[from] sqlx::Error),

    /// A migration failed.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A data initializer failed.
    #[error("Seeding failed: {0}")]
    Seed(#[from] SeedError),

    /// Invalid username argument.
    #[error("Invalid username: {0}")]
    InvalidUsername(#[from] UsernameError),

    /// Customer registration failed.
    #[error("Registration failed: {0}")]
    Registration(#[from] RegistrationError),

    /// Account directory error.
    #[error("Account directory error: {0}")]
    Accounts(#[from] AccountError),

    /// Customer store error.
    #[error("Customer store error: {0}")]
    Customers(#[from] CustomerError),
}

/// Load configuration and connect to the storefront database.
async fn connect() -> Result<(StorefrontConfig, PgPool), CommandError> {
    let config = StorefrontConfig::from_env()?;

    tracing::info!("Connecting to storefront database...");
    let pool = db::create_pool(&config.database).await?;

    Ok((config, pool))
}
