//! User account domain type.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use videoshop_core::{EncryptedPassword, Role, UserAccountId, Username};

/// An authenticable identity with a hashed credential and a role set.
///
/// Accounts are created and persisted by an
/// [`AccountDirectory`](crate::accounts::AccountDirectory); everyone else only
/// holds them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAccount {
    /// Directory-assigned ID.
    pub id: UserAccountId,
    /// Unique login name.
    pub username: Username,
    /// Argon2 hash of the password.
    pub password: EncryptedPassword,
    /// Granted roles.
    pub roles: BTreeSet<Role>,
    /// Disabled accounts cannot log in.
    pub enabled: bool,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

impl UserAccount {
    /// Whether the account carries `role`.
    #[must_use]
    pub fn has_role(&self, role: &Role) -> bool {
        self.roles.contains(role)
    }

    /// Grant an additional role. Returns `false` if it was already present.
    pub fn add_role(&mut self, role: Role) -> bool {
        self.roles.insert(role)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn account() -> UserAccount {
        UserAccount {
            id: UserAccountId::new(1),
            username: Username::parse("hans").unwrap(),
            password: EncryptedPassword::new(String::new()),
            roles: BTreeSet::from([Role::customer()]),
            enabled: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_has_role() {
        let account = account();
        assert!(account.has_role(&Role::customer()));
        assert!(!account.has_role(&Role::boss()));
    }

    #[test]
    fn test_add_role_is_set_like() {
        let mut account = account();
        assert!(account.add_role(Role::boss()));
        assert!(!account.add_role(Role::boss()));
        assert_eq!(account.roles.len(), 2);
    }
}
