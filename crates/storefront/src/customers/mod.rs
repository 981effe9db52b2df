//! Customer store capability.
//!
//! A [`CustomerStore`] persists customers in bulk and reads them back. Every
//! customer references exactly one account, and an account backs at most one
//! customer.

pub mod memory;

use async_trait::async_trait;
use thiserror::Error;

use videoshop_core::UserAccountId;

use crate::db::RepositoryError;
use crate::models::{Customer, NewCustomer};

pub use memory::InMemoryCustomerStore;

/// Errors that can occur during customer store operations.
#[derive(Debug, Error)]
pub enum CustomerError {
    /// The referenced account does not exist in the backing store.
    #[error("unknown account: {0}")]
    UnknownAccount(UserAccountId),

    /// The account already backs another customer.
    #[error("account {0} already belongs to a customer")]
    AccountAlreadyLinked(UserAccountId),

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Bulk persistence of customer records.
#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// Store all `customers`, returning them with their assigned IDs in input order.
    ///
    /// # Errors
    ///
    /// Returns `CustomerError::AccountAlreadyLinked` if an account already
    /// backs a customer (or appears twice in the batch).
    async fn save_all(&self, customers: Vec<NewCustomer>) -> Result<Vec<Customer>, CustomerError>;

    /// All customers, ordered by ID.
    async fn find_all(&self) -> Result<Vec<Customer>, CustomerError>;

    /// Number of customers.
    async fn count(&self) -> Result<usize, CustomerError> {
        Ok(self.find_all().await?.len())
    }
}
