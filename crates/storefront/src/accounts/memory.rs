//! In-memory account directory.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use videoshop_core::{Role, UnencryptedPassword, UserAccountId, Username};

use super::{AccountDirectory, AccountError, password};
use crate::models::UserAccount;

/// Account directory backed by process memory.
///
/// Clones share the same accounts, so a test can hand one clone to the code
/// under test and inspect another afterwards.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAccountDirectory {
    inner: Arc<RwLock<Accounts>>,
}

#[derive(Debug, Default)]
struct Accounts {
    last_id: i32,
    by_username: BTreeMap<Username, UserAccount>,
}

impl InMemoryAccountDirectory {
    /// Create an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountDirectory for InMemoryAccountDirectory {
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<UserAccount>, AccountError> {
        Ok(self.inner.read().await.by_username.get(username).cloned())
    }

    async fn create(
        &self,
        username: &Username,
        password: &UnencryptedPassword,
        roles: &[Role],
    ) -> Result<UserAccount, AccountError> {
        let hash = password::encrypt(password)?;

        let mut accounts = self.inner.write().await;
        if accounts.by_username.contains_key(username) {
            return Err(AccountError::UsernameTaken(username.clone()));
        }

        accounts.last_id += 1;
        let account = UserAccount {
            id: UserAccountId::new(accounts.last_id),
            username: username.clone(),
            password: hash,
            roles: roles.iter().cloned().collect(),
            enabled: true,
            created_at: Utc::now(),
        };
        accounts
            .by_username
            .insert(username.clone(), account.clone());

        Ok(account)
    }

    async fn save(&self, account: &UserAccount) -> Result<UserAccount, AccountError> {
        let mut accounts = self.inner.write().await;
        let stored = accounts
            .by_username
            .get_mut(&account.username)
            .filter(|stored| stored.id == account.id)
            .ok_or(AccountError::NotFound(account.id))?;

        stored.password = account.password.clone();
        stored.roles = account.roles.clone();
        stored.enabled = account.enabled;

        Ok(stored.clone())
    }

    async fn find_all(&self) -> Result<Vec<UserAccount>, AccountError> {
        let mut all: Vec<UserAccount> = self
            .inner
            .read()
            .await
            .by_username
            .values()
            .cloned()
            .collect();
        all.sort_by_key(|account| account.id);
        Ok(all)
    }

    async fn count(&self) -> Result<usize, AccountError> {
        Ok(self.inner.read().await.by_username.len())
    }
}
