//! Account directory capability.
//!
//! An [`AccountDirectory`] looks accounts up by username, creates them from a
//! plaintext password and a role set, and saves changes to existing ones.
//! Creating an account hashes the password and persists the account in one
//! step.
//!
//! Implementations:
//! - [`InMemoryAccountDirectory`] - shared in-process state, for tests and dry runs
//! - [`PgAccountDirectory`](crate::db::PgAccountDirectory) - the `shop.user_account` table

pub mod memory;
pub mod password;

use async_trait::async_trait;
use thiserror::Error;

use videoshop_core::{Role, UnencryptedPassword, UserAccountId, Username};

use crate::db::RepositoryError;
use crate::models::UserAccount;

pub use memory::InMemoryAccountDirectory;

/// Errors that can occur during account directory operations.
#[derive(Debug, Error)]
pub enum AccountError {
    /// Another account already uses this username.
    #[error("username already taken: {0}")]
    UsernameTaken(Username),

    /// No account with this ID exists.
    #[error("account not found: {0}")]
    NotFound(UserAccountId),

    /// Password hashing failed.
    #[error("password hashing error")]
    PasswordHash,

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Lookup, creation and persistence of user accounts.
#[async_trait]
pub trait AccountDirectory: Send + Sync {
    /// Find the account with exactly this username.
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<UserAccount>, AccountError>;

    /// Hash `password` and persist a new enabled account with `roles`.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::UsernameTaken` if the username is in use.
    async fn create(
        &self,
        username: &Username,
        password: &UnencryptedPassword,
        roles: &[Role],
    ) -> Result<UserAccount, AccountError>;

    /// Write the roles, password hash and enabled flag of an existing account.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::NotFound` if no account has `account.id`.
    async fn save(&self, account: &UserAccount) -> Result<UserAccount, AccountError>;

    /// All accounts, ordered by ID.
    async fn find_all(&self) -> Result<Vec<UserAccount>, AccountError>;

    /// Number of accounts.
    async fn count(&self) -> Result<usize, AccountError> {
        Ok(self.find_all().await?.len())
    }
}
