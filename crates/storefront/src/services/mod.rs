//! Business services built on the account directory and customer store.

pub mod customer_management;

pub use customer_management::{CustomerManagement, RegistrationError, RegistrationForm};
