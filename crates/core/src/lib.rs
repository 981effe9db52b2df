//! Videoshop Core - Shared account and customer types.
//!
//! This crate provides the domain vocabulary used across all Videoshop components:
//! - `storefront` - Account directory, customer store and startup data initializers
//! - `cli` - Command-line tools for migrations, seeding and customer management
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no password
//! hashing. Values are validated on construction so that anything holding a
//! [`Username`] or [`Role`] can rely on its shape.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, usernames, roles and passwords

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
