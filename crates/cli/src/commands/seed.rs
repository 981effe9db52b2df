//! Demo data seeding command.
//!
//! Runs the startup data initializers in order. With `--dry-run` the
//! initializers write to in-memory collaborators and only the resulting
//! counts are reported.

use tracing::info;

use videoshop_storefront::accounts::{AccountDirectory, InMemoryAccountDirectory};
use videoshop_storefront::customers::{CustomerStore, InMemoryCustomerStore};
use videoshop_storefront::db::{PgAccountDirectory, PgCustomerStore};
use videoshop_storefront::seed::{CustomerSeeder, DataInitializers};

use super::{CommandError, connect};

/// Seed demo accounts and customers.
///
/// # Arguments
///
/// * `dry_run` - Seed in-memory stores instead of the database
///
/// # Errors
///
/// Returns an error if configuration is missing, the database is unreachable,
/// or an initializer fails.
pub async fn demo_data(dry_run: bool) -> Result<(), CommandError> {
    if dry_run {
        let accounts = InMemoryAccountDirectory::new();
        let customers = InMemoryCustomerStore::new();
        run_initializers(accounts.clone(), customers.clone()).await?;
        report(&accounts, &customers).await?;
        return Ok(());
    }

    let (config, pool) = connect().await?;
    if !config.seed_demo_data {
        info!("Demo data disabled (STOREFRONT_SEED_DEMO_DATA=false), nothing to do");
        return Ok(());
    }

    let accounts = PgAccountDirectory::new(pool.clone());
    let customers = PgCustomerStore::new(pool);
    run_initializers(accounts.clone(), customers.clone()).await?;
    report(&accounts, &customers).await?;

    Ok(())
}

async fn run_initializers<A, C>(accounts: A, customers: C) -> Result<(), CommandError>
where
    A: AccountDirectory + 'static,
    C: CustomerStore + 'static,
{
    let initializers = DataInitializers::new().with(CustomerSeeder::new(accounts, customers));
    info!(sequence = ?initializers.sequence(), "Starting data initializers");
    initializers.run_all().await?;
    Ok(())
}

async fn report<A, C>(accounts: &A, customers: &C) -> Result<(), CommandError>
where
    A: AccountDirectory,
    C: CustomerStore,
{
    info!("Seeding complete!");
    info!("  Accounts: {}", accounts.count().await?);
    info!("  Customers: {}", customers.count().await?);
    Ok(())
}
