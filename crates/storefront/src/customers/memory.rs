//! In-memory customer store.

use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use videoshop_core::CustomerId;

use super::{CustomerError, CustomerStore};
use crate::models::{Customer, NewCustomer};

/// Customer store backed by process memory.
///
/// Clones share the same customers. A batch is checked as a whole before
/// anything is inserted.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCustomerStore {
    inner: Arc<RwLock<Vec<Customer>>>,
}

impl InMemoryCustomerStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CustomerStore for InMemoryCustomerStore {
    async fn save_all(&self, customers: Vec<NewCustomer>) -> Result<Vec<Customer>, CustomerError> {
        let mut stored = self.inner.write().await;

        let mut linked: BTreeSet<_> = stored.iter().map(|c| c.account.id).collect();
        for customer in &customers {
            if !linked.insert(customer.account.id) {
                return Err(CustomerError::AccountAlreadyLinked(customer.account.id));
            }
        }

        let mut next_id = stored.last().map_or(0, |c| c.id.as_i32());
        let saved: Vec<Customer> = customers
            .into_iter()
            .map(|customer| {
                next_id += 1;
                Customer {
                    id: CustomerId::new(next_id),
                    account: customer.account,
                    address: customer.address,
                }
            })
            .collect();

        stored.extend(saved.iter().cloned());
        Ok(saved)
    }

    async fn find_all(&self) -> Result<Vec<Customer>, CustomerError> {
        Ok(self.inner.read().await.clone())
    }

    async fn count(&self) -> Result<usize, CustomerError> {
        Ok(self.inner.read().await.len())
    }
}
