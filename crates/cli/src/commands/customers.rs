//! Customer management commands.
//!
//! # Usage
//!
//! ```bash
//! # List all customers
//! vs-cli customers list
//!
//! # Register a new customer
//! vs-cli customers register -u rita -p hunter22 -a "Bay Harbor"
//! ```

use secrecy::SecretString;

use videoshop_core::{UnencryptedPassword, Username};
use videoshop_storefront::db::{PgAccountDirectory, PgCustomerStore};
use videoshop_storefront::services::{CustomerManagement, RegistrationForm};

use super::{CommandError, connect};

async fn management() -> Result<CustomerManagement<PgAccountDirectory, PgCustomerStore>, CommandError>
{
    let (_config, pool) = connect().await?;
    Ok(CustomerManagement::new(
        PgAccountDirectory::new(pool.clone()),
        PgCustomerStore::new(pool),
    ))
}

/// Log every stored customer.
///
/// # Errors
///
/// Returns an error if the database is unreachable.
pub async fn list() -> Result<(), CommandError> {
    let customers = management().await?.find_all().await?;

    tracing::info!("Customers ({})", customers.len());
    for customer in &customers {
        tracing::info!(
            "  #{} {} - {}",
            customer.id,
            customer.account.username,
            customer.address
        );
    }

    Ok(())
}

/// Register a customer.
///
/// # Errors
///
/// Returns an error if the username is invalid or taken, the address is
/// blank, or the database is unreachable.
pub async fn register(username: &str, password: String, address: &str) -> Result<(), CommandError> {
    let form = RegistrationForm {
        username: Username::parse(username)?,
        password: UnencryptedPassword::from(SecretString::from(password)),
        address: address.to_owned(),
    };

    let customer = management().await?.register(form).await?;

    tracing::info!(
        "Customer registered! ID: {}, Username: {}, Address: {}",
        customer.id,
        customer.account.username,
        customer.address
    );
    Ok(())
}
