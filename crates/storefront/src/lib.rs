//! Videoshop Storefront library.
//!
//! Owns the account directory, the customer store and the startup data
//! initializers that populate them. The HTTP layer lives elsewhere; this crate
//! is the persistence and seeding half of the shop.
//!
//! # Layout
//!
//! - [`accounts`] - [`AccountDirectory`](accounts::AccountDirectory) capability, password hashing, in-memory directory
//! - [`customers`] - [`CustomerStore`](customers::CustomerStore) capability and in-memory store
//! - [`db`] - `PostgreSQL` implementations of both capabilities plus migrations
//! - [`seed`] - Ordered startup initializers, including the demo customer seeder
//! - [`services`] - Customer registration on top of the two capabilities

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod accounts;
pub mod config;
pub mod customers;
pub mod db;
pub mod models;
pub mod seed;
pub mod services;
