//! `PostgreSQL` customer store.

use async_trait::async_trait;
use sqlx::PgPool;

use videoshop_core::CustomerId;

use super::accounts::UserAccountRow;
use super::{RepositoryError, is_foreign_key_violation, is_unique_violation};
use crate::customers::{CustomerError, CustomerStore};
use crate::models::{Customer, NewCustomer, UserAccount};

/// Internal row type for customers joined with their account.
#[derive(Debug, sqlx::FromRow)]
struct CustomerRow {
    customer_id: i32,
    address: String,
    #[sqlx(flatten)]
    account: UserAccountRow,
}

impl TryFrom<CustomerRow> for Customer {
    type Error = RepositoryError;

    fn try_from(row: CustomerRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CustomerId::new(row.customer_id),
            account: UserAccount::try_from(row.account)?,
            address: row.address,
        })
    }
}

/// Customer store over the `shop.customer` table.
#[derive(Debug, Clone)]
pub struct PgCustomerStore {
    pool: PgPool,
}

impl PgCustomerStore {
    /// Create a store using `pool`.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerStore for PgCustomerStore {
    /// Inserts the whole batch in one transaction.
    async fn save_all(&self, customers: Vec<NewCustomer>) -> Result<Vec<Customer>, CustomerError> {
        let mut tx = self.pool.begin().await.map_err(RepositoryError::from)?;
        let mut saved = Vec::with_capacity(customers.len());

        for customer in customers {
            let account_id = customer.account.id;
            let id: i32 = sqlx::query_scalar(
                r"
                INSERT INTO shop.customer (user_account_id, address)
                VALUES ($1, $2)
                RETURNING id
                ",
            )
            .bind(account_id)
            .bind(&customer.address)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    return CustomerError::UnknownAccount(account_id);
                }
                if is_unique_violation(&e) {
                    return CustomerError::AccountAlreadyLinked(account_id);
                }
                CustomerError::Repository(RepositoryError::Database(e))
            })?;

            saved.push(Customer {
                id: CustomerId::new(id),
                account: customer.account,
                address: customer.address,
            });
        }

        tx.commit().await.map_err(RepositoryError::from)?;

        tracing::debug!(count = saved.len(), "Customers saved");
        Ok(saved)
    }

    async fn find_all(&self) -> Result<Vec<Customer>, CustomerError> {
        let rows = sqlx::query_as::<_, CustomerRow>(
            r"
            SELECT c.id AS customer_id, c.address,
                   a.id, a.username, a.password_hash, a.roles, a.enabled, a.created_at
            FROM shop.customer c
            JOIN shop.user_account a ON a.id = c.user_account_id
            ORDER BY c.id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(RepositoryError::from)?;

        Ok(rows
            .into_iter()
            .map(Customer::try_from)
            .collect::<Result<Vec<_>, _>>()?)
    }

    async fn count(&self) -> Result<usize, CustomerError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM shop.customer")
            .fetch_one(&self.pool)
            .await
            .map_err(RepositoryError::from)?;

        usize::try_from(count)
            .map_err(|e| RepositoryError::DataCorruption(format!("negative count: {e}")).into())
    }
}
