//! `PostgreSQL` account directory.

use std::collections::BTreeSet;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use videoshop_core::{EncryptedPassword, Role, UnencryptedPassword, UserAccountId, Username};

use super::{RepositoryError, is_unique_violation};
use crate::accounts::{AccountDirectory, AccountError, password};
use crate::models::UserAccount;

// =============================================================================
// Internal Row Types
// =============================================================================

/// Internal row type for `shop.user_account` queries.
#[derive(Debug, sqlx::FromRow)]
pub(super) struct UserAccountRow {
    id: i32,
    username: String,
    password_hash: String,
    roles: Vec<String>,
    enabled: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserAccountRow> for UserAccount {
    type Error = RepositoryError;

    fn try_from(row: UserAccountRow) -> Result<Self, Self::Error> {
        let username = Username::parse(&row.username).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid username in database: {e}"))
        })?;

        let roles = row
            .roles
            .iter()
            .map(|name| Role::of(name))
            .collect::<Result<BTreeSet<_>, _>>()
            .map_err(|e| RepositoryError::DataCorruption(format!("invalid role in database: {e}")))?;

        Ok(Self {
            id: UserAccountId::new(row.id),
            username,
            password: EncryptedPassword::new(row.password_hash),
            roles,
            enabled: row.enabled,
            created_at: row.created_at,
        })
    }
}

fn role_names<'a>(roles: impl IntoIterator<Item = &'a Role>) -> Vec<String> {
    roles.into_iter().map(|role| role.name().to_owned()).collect()
}

// =============================================================================
// Directory
// =============================================================================

/// Account directory over the `shop.user_account` table.
#[derive(Debug, Clone)]
pub struct PgAccountDirectory {
    pool: PgPool,
}

impl PgAccountDirectory {
    /// Create a directory using `pool`.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountDirectory for PgAccountDirectory {
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<UserAccount>, AccountError> {
        let row = sqlx::query_as::<_, UserAccountRow>(
            r"
            SELECT id, username, password_hash, roles, enabled, created_at
            FROM shop.user_account
            WHERE username = $1
            ",
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(RepositoryError::from)?;

        Ok(row.map(UserAccount::try_from).transpose()?)
    }

    async fn create(
        &self,
        username: &Username,
        password: &UnencryptedPassword,
        roles: &[Role],
    ) -> Result<UserAccount, AccountError> {
        let hash = password::encrypt(password)?;

        let row = sqlx::query_as::<_, UserAccountRow>(
            r"
            INSERT INTO shop.user_account (username, password_hash, roles)
            VALUES ($1, $2, $3)
            RETURNING id, username, password_hash, roles, enabled, created_at
            ",
        )
        .bind(username.as_str())
        .bind(hash.as_str())
        .bind(role_names(roles))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                return AccountError::UsernameTaken(username.clone());
            }
            AccountError::Repository(RepositoryError::Database(e))
        })?;

        tracing::debug!(username = %username, "Account created");
        Ok(UserAccount::try_from(row)?)
    }

    async fn save(&self, account: &UserAccount) -> Result<UserAccount, AccountError> {
        let row = sqlx::query_as::<_, UserAccountRow>(
            r"
            UPDATE shop.user_account
            SET password_hash = $2, roles = $3, enabled = $4
            WHERE id = $1
            RETURNING id, username, password_hash, roles, enabled, created_at
            ",
        )
        .bind(account.id)
        .bind(account.password.as_str())
        .bind(role_names(&account.roles))
        .bind(account.enabled)
        .fetch_optional(&self.pool)
        .await
        .map_err(RepositoryError::from)?
        .ok_or(AccountError::NotFound(account.id))?;

        Ok(UserAccount::try_from(row)?)
    }

    async fn find_all(&self) -> Result<Vec<UserAccount>, AccountError> {
        let rows = sqlx::query_as::<_, UserAccountRow>(
            r"
            SELECT id, username, password_hash, roles, enabled, created_at
            FROM shop.user_account
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(RepositoryError::from)?;

        Ok(rows
            .into_iter()
            .map(UserAccount::try_from)
            .collect::<Result<Vec<_>, _>>()?)
    }

    async fn count(&self) -> Result<usize, AccountError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM shop.user_account")
            .fetch_one(&self.pool)
            .await
            .map_err(RepositoryError::from)?;

        usize::try_from(count)
            .map_err(|e| RepositoryError::DataCorruption(format!("negative count: {e}")).into())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn row(username: &str, roles: &[&str]) -> UserAccountRow {
        UserAccountRow {
            id: 4,
            username: username.to_owned(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_owned(),
            roles: roles.iter().map(|r| (*r).to_owned()).collect(),
            enabled: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_row_converts_to_account() {
        let account = UserAccount::try_from(row("mclovinfogell", &["ROLE_CUSTOMER"])).unwrap();
        assert_eq!(account.id, UserAccountId::new(4));
        assert_eq!(account.username.as_str(), "mclovinfogell");
        assert!(account.has_role(&Role::customer()));
    }

    #[test]
    fn test_row_with_bad_username_is_corruption() {
        let err = UserAccount::try_from(row("", &[])).unwrap_err();
        assert!(matches!(err, RepositoryError::DataCorruption(_)));
    }

    #[test]
    fn test_row_with_bad_role_is_corruption() {
        let err = UserAccount::try_from(row("hans", &["customer"])).unwrap_err();
        assert!(matches!(err, RepositoryError::DataCorruption(msg) if msg.contains("role")));
    }

    #[test]
    fn test_role_names_preserve_order() {
        let roles = BTreeSet::from([Role::customer(), Role::boss()]);
        assert_eq!(role_names(&roles), vec!["ROLE_BOSS", "ROLE_CUSTOMER"]);
    }
}
