//! Demo customer seeder.
//!
//! Populates an empty shop with one administrator (`boss`) and four customers.
//! The presence of `boss` marks the whole set as applied; no other record is
//! checked, so a run that failed after creating `boss` is never repaired.

use async_trait::async_trait;
use tracing::{debug, info};

use videoshop_core::{Role, UnencryptedPassword, Username};

use super::{DataInitializer, SeedError};
use crate::accounts::AccountDirectory;
use crate::customers::CustomerStore;
use crate::models::NewCustomer;

/// Username of the administrator account, also the "already seeded" marker.
pub const BOSS_USERNAME: &str = "boss";

/// Password shared by every demo account.
pub const DEMO_PASSWORD: &str = "123";

/// Demo customers as `(username, delivery address)`, in creation order.
pub const DEMO_CUSTOMERS: [(&str, &str); 4] = [
    ("hans", "wurst"),
    ("dextermorgan", "Miami-Dade County"),
    ("earlhickey", "Camden County - Motel"),
    ("mclovinfogell", "Los Angeles"),
];

/// Creates the demo administrator and customers on first startup.
///
/// Runs at order `10` among the data initializers.
#[derive(Debug, Clone)]
pub struct CustomerSeeder<A, C> {
    accounts: A,
    customers: C,
}

impl<A, C> CustomerSeeder<A, C>
where
    A: AccountDirectory,
    C: CustomerStore,
{
    /// Startup position among data initializers.
    pub const ORDER: i32 = 10;

    /// Create a seeder writing to `accounts` and `customers`.
    #[must_use]
    pub const fn new(accounts: A, customers: C) -> Self {
        Self {
            accounts,
            customers,
        }
    }

    /// Start assembling a seeder from optional parts.
    #[must_use]
    pub const fn builder() -> CustomerSeederBuilder<A, C> {
        CustomerSeederBuilder {
            accounts: None,
            customers: None,
        }
    }

    /// Seed the demo accounts and customers unless `boss` already exists.
    ///
    /// Nothing is rolled back on failure: accounts created before an error
    /// stay in the directory.
    ///
    /// # Errors
    ///
    /// Returns `SeedError::Accounts` or `SeedError::Customers` when a
    /// collaborator fails.
    pub async fn run(&self) -> Result<(), SeedError> {
        let boss = Username::parse(BOSS_USERNAME)?;

        if self.accounts.find_by_username(&boss).await?.is_some() {
            debug!(sentinel = %boss, "Demo data already present, skipping");
            return Ok(());
        }

        info!("Creating default users and customers.");

        let password = UnencryptedPassword::of(DEMO_PASSWORD);

        let boss_account = self
            .accounts
            .create(&boss, &password, &[Role::boss()])
            .await?;
        self.accounts.save(&boss_account).await?;

        let customer_role = [Role::customer()];
        let mut customers = Vec::with_capacity(DEMO_CUSTOMERS.len());
        for (username, address) in DEMO_CUSTOMERS {
            let username = Username::parse(username)?;
            let account = self
                .accounts
                .create(&username, &password, &customer_role)
                .await?;
            customers.push(NewCustomer::new(account, address));
        }

        let saved = self.customers.save_all(customers).await?;
        debug!(customers = saved.len(), "Demo customers stored");

        Ok(())
    }

    /// The account directory this seeder writes to.
    pub const fn accounts(&self) -> &A {
        &self.accounts
    }

    /// The customer store this seeder writes to.
    pub const fn customers(&self) -> &C {
        &self.customers
    }
}

#[async_trait]
impl<A, C> DataInitializer for CustomerSeeder<A, C>
where
    A: AccountDirectory,
    C: CustomerStore,
{
    fn name(&self) -> &'static str {
        "customers"
    }

    fn order(&self) -> i32 {
        Self::ORDER
    }

    async fn initialize(&self) -> Result<(), SeedError> {
        self.run().await
    }
}

/// Assembles a [`CustomerSeeder`] and rejects missing collaborators.
#[derive(Debug)]
pub struct CustomerSeederBuilder<A, C> {
    accounts: Option<A>,
    customers: Option<C>,
}

impl<A, C> CustomerSeederBuilder<A, C>
where
    A: AccountDirectory,
    C: CustomerStore,
{
    /// Set the account directory.
    #[must_use]
    pub fn accounts(mut self, accounts: A) -> Self {
        self.accounts = Some(accounts);
        self
    }

    /// Set the customer store.
    #[must_use]
    pub fn customers(mut self, customers: C) -> Self {
        self.customers = Some(customers);
        self
    }

    /// Build the seeder.
    ///
    /// # Errors
    ///
    /// Returns `SeedError::MissingCollaborator` naming the first missing part.
    pub fn build(self) -> Result<CustomerSeeder<A, C>, SeedError> {
        let customers = self
            .customers
            .ok_or(SeedError::MissingCollaborator("CustomerStore"))?;
        let accounts = self
            .accounts
            .ok_or(SeedError::MissingCollaborator("AccountDirectory"))?;

        Ok(CustomerSeeder::new(accounts, customers))
    }
}
