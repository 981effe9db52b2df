//! Customer registration and listing.

use thiserror::Error;

use videoshop_core::{Role, UnencryptedPassword, Username};

use crate::accounts::{AccountDirectory, AccountError};
use crate::customers::{CustomerError, CustomerStore};
use crate::models::{Customer, NewCustomer};

/// Errors that can occur while registering a customer.
#[derive(Debug, Error)]
pub enum RegistrationError {
    /// The delivery address is blank.
    #[error("address must not be blank")]
    BlankAddress,

    /// Username already registered.
    #[error("username already taken: {0}")]
    UsernameTaken(Username),

    /// Account directory failure.
    #[error("account directory error: {0}")]
    Accounts(AccountError),

    /// Customer store failure.
    #[error("customer store error: {0}")]
    Customers(#[from] CustomerError),
}

impl From<AccountError> for RegistrationError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::UsernameTaken(username) => Self::UsernameTaken(username),
            other => Self::Accounts(other),
        }
    }
}

/// Input for a new customer.
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    /// Login name.
    pub username: Username,
    /// Plaintext password, hashed by the directory.
    pub password: UnencryptedPassword,
    /// Delivery address.
    pub address: String,
}

/// Registers customers and lists them.
#[derive(Debug, Clone)]
pub struct CustomerManagement<A, C> {
    accounts: A,
    customers: C,
}

impl<A, C> CustomerManagement<A, C>
where
    A: AccountDirectory,
    C: CustomerStore,
{
    /// Create the service over `accounts` and `customers`.
    #[must_use]
    pub const fn new(accounts: A, customers: C) -> Self {
        Self {
            accounts,
            customers,
        }
    }

    /// Create a customer account with `ROLE_CUSTOMER` and its customer record.
    ///
    /// The address is trimmed. The account is not removed again if storing
    /// the customer fails.
    ///
    /// # Errors
    ///
    /// Returns `RegistrationError::BlankAddress` for an empty address and
    /// `RegistrationError::UsernameTaken` if the username is in use.
    pub async fn register(&self, form: RegistrationForm) -> Result<Customer, RegistrationError> {
        let address = form.address.trim();
        if address.is_empty() {
            return Err(RegistrationError::BlankAddress);
        }

        let account = self
            .accounts
            .create(&form.username, &form.password, &[Role::customer()])
            .await?;
        tracing::info!(username = %account.username, "Registering customer");

        let saved = self
            .customers
            .save_all(vec![NewCustomer::new(account, address)])
            .await?;

        saved
            .into_iter()
            .next()
            .ok_or(RegistrationError::Customers(CustomerError::Repository(
                crate::db::RepositoryError::NotFound,
            )))
    }

    /// All customers, ordered by ID.
    ///
    /// # Errors
    ///
    /// Returns `CustomerError` if the store cannot be read.
    pub async fn find_all(&self) -> Result<Vec<Customer>, CustomerError> {
        self.customers.find_all().await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::accounts::{InMemoryAccountDirectory, password};
    use crate::customers::InMemoryCustomerStore;

    fn form(username: &str, address: &str) -> RegistrationForm {
        RegistrationForm {
            username: Username::parse(username).unwrap(),
            password: UnencryptedPassword::of("hunter22"),
            address: address.to_owned(),
        }
    }

    fn service() -> CustomerManagement<InMemoryAccountDirectory, InMemoryCustomerStore> {
        CustomerManagement::new(InMemoryAccountDirectory::new(), InMemoryCustomerStore::new())
    }

    #[tokio::test]
    async fn test_register_creates_customer_account() {
        let service = service();
        let customer = service
            .register(form("rita", "  Bay Harbor  "))
            .await
            .unwrap();

        assert_eq!(customer.address, "Bay Harbor");
        assert!(customer.account.has_role(&Role::customer()));
        assert!(password::matches(
            &UnencryptedPassword::of("hunter22"),
            &customer.account.password
        ));
        assert_eq!(service.find_all().await.unwrap(), vec![customer]);
    }

    #[tokio::test]
    async fn test_register_rejects_blank_address() {
        let service = service();
        let err = service.register(form("rita", "   ")).await.unwrap_err();
        assert!(matches!(err, RegistrationError::BlankAddress));
        assert!(service.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_register_rejects_taken_username() {
        let service = service();
        service.register(form("rita", "Bay Harbor")).await.unwrap();

        let err = service.register(form("rita", "Miami")).await.unwrap_err();
        assert!(matches!(err, RegistrationError::UsernameTaken(name) if name.as_str() == "rita"));
        assert_eq!(service.find_all().await.unwrap().len(), 1);
    }
}
