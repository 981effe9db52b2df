//! Password types.
//!
//! Plaintext passwords only ever live in an [`UnencryptedPassword`], which
//! wraps a [`SecretString`] so it never shows up in logs. Stores keep the
//! [`EncryptedPassword`] produced by the account directory's hasher.

use core::fmt;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// A plaintext password as typed by a user or fixed in demo data.
#[derive(Clone)]
pub struct UnencryptedPassword(SecretString);

impl UnencryptedPassword {
    /// Wrap a plaintext password.
    #[must_use]
    pub fn of(password: &str) -> Self {
        Self(SecretString::from(password.to_owned()))
    }

    /// Expose the plaintext for hashing or verification.
    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl fmt::Debug for UnencryptedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("UnencryptedPassword([REDACTED])")
    }
}

impl From<SecretString> for UnencryptedPassword {
    fn from(secret: SecretString) -> Self {
        Self(secret)
    }
}

/// A password hash in PHC string format.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncryptedPassword(String);

impl EncryptedPassword {
    /// Wrap an already computed hash.
    #[must_use]
    pub const fn new(hash: String) -> Self {
        Self(hash)
    }

    /// The PHC hash string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for EncryptedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EncryptedPassword([HASH])")
    }
}
