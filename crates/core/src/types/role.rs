//! Account roles.
//!
//! A role is a named permission tag attached to an account. Controllers and
//! views check for roles to restrict areas of the shop. Names carry the
//! `ROLE_` prefix expected by the access rules.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Role`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RoleError {
    /// The role name is empty.
    #[error("role name cannot be empty")]
    Empty,
    /// The role name contains characters other than `A-Z`, `0-9` and `_`.
    #[error("invalid role name: {0}")]
    InvalidName(String),
}

/// A named permission tag.
///
/// ```
/// use videoshop_core::Role;
///
/// let role: Role = "ROLE_CUSTOMER".parse().unwrap();
/// assert_eq!(role, Role::customer());
/// assert!("role customer".parse::<Role>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Role(String);

impl Role {
    /// Name of the administrator role.
    pub const BOSS: &'static str = "ROLE_BOSS";
    /// Name of the customer role.
    pub const CUSTOMER: &'static str = "ROLE_CUSTOMER";

    /// Parse a role name.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or contains anything other than
    /// uppercase ASCII letters, digits and underscores.
    pub fn of(name: &str) -> Result<Self, RoleError> {
        if name.is_empty() {
            return Err(RoleError::Empty);
        }

        if !name
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
        {
            return Err(RoleError::InvalidName(name.to_owned()));
        }

        Ok(Self(name.to_owned()))
    }

    /// The administrator role (`ROLE_BOSS`).
    #[must_use]
    pub fn boss() -> Self {
        Self(Self::BOSS.to_owned())
    }

    /// The customer role (`ROLE_CUSTOMER`).
    #[must_use]
    pub fn customer() -> Self {
        Self(Self::CUSTOMER.to_owned())
    }

    /// Returns the role name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Role {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::of(s)
    }
}

impl TryFrom<String> for Role {
    type Error = RoleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::of(&value)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.0
    }
}
