//! Integration tests for Videoshop.
//!
//! # Running Tests
//!
//! ```bash
//! # In-memory scenarios
//! cargo test -p videoshop-integration-tests
//!
//! # PostgreSQL scenarios (needs an empty, migratable database)
//! STOREFRONT_DATABASE_URL=postgres://... cargo test -p videoshop-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `customer_seeding` - Demo seeder against in-memory collaborators and failing fakes
//! - `postgres_seeding` - Demo seeder and registration against `PostgreSQL`
//!
//! This library holds the fixtures shared by those test files.

#![cfg_attr(not(test), forbid(unsafe_code))]

use async_trait::async_trait;

use videoshop_storefront::customers::{CustomerError, CustomerStore};
use videoshop_storefront::db::RepositoryError;
use videoshop_storefront::models::{Customer, NewCustomer};

/// Usernames the demo seeder creates for customers.
pub const DEMO_CUSTOMER_USERNAMES: [&str; 4] = ["hans", "dextermorgan", "earlhickey", "mclovinfogell"];

/// Addresses the demo seeder assigns, in the same order.
pub const DEMO_ADDRESSES: [&str; 4] = ["wurst", "Miami-Dade County", "Camden County - Motel", "Los Angeles"];

/// A customer store whose writes always fail, as if the database went away.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableCustomerStore;

#[async_trait]
impl CustomerStore for UnavailableCustomerStore {
    async fn save_all(&self, _customers: Vec<NewCustomer>) -> Result<Vec<Customer>, CustomerError> {
        Err(CustomerError::Repository(RepositoryError::Database(
            sqlx::Error::PoolTimedOut,
        )))
    }

    async fn find_all(&self) -> Result<Vec<Customer>, CustomerError> {
        Ok(Vec::new())
    }
}
