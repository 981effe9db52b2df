//! Domain models for accounts and customers.
//!
//! These are validated domain objects, separate from the database row types
//! in [`crate::db`].

pub mod account;
pub mod customer;

pub use account::UserAccount;
pub use customer::{Customer, NewCustomer};
