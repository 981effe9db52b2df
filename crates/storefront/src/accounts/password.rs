//! Argon2id password hashing.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use videoshop_core::{EncryptedPassword, UnencryptedPassword};

use super::AccountError;

/// Hash a password using Argon2id with a fresh random salt.
///
/// # Errors
///
/// Returns `AccountError::PasswordHash` if hashing fails.
pub fn encrypt(password: &UnencryptedPassword) -> Result<EncryptedPassword, AccountError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.expose().as_bytes(), &salt)
        .map(|hash| EncryptedPassword::new(hash.to_string()))
        .map_err(|_| AccountError::PasswordHash)
}

/// Check a password against a stored hash.
///
/// Malformed hashes never match.
#[must_use]
pub fn matches(password: &UnencryptedPassword, hash: &EncryptedPassword) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(hash.as_str()) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.expose().as_bytes(), &parsed_hash)
        .is_ok()
}
