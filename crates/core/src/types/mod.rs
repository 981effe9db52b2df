//! Core types for Videoshop.
//!
//! This module provides type-safe wrappers for account and customer concepts.

pub mod id;
pub mod password;
pub mod role;
pub mod username;

pub use id::*;
pub use password::{EncryptedPassword, UnencryptedPassword};
pub use role::{Role, RoleError};
pub use username::{Username, UsernameError};
