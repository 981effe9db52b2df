//! Customer domain types.

use videoshop_core::CustomerId;

use super::UserAccount;

/// A customer that has not been stored yet.
///
/// Links exactly one account to a free-text delivery address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    /// Owning account.
    pub account: UserAccount,
    /// Delivery address.
    pub address: String,
}

impl NewCustomer {
    /// Pair an account with a delivery address.
    #[must_use]
    pub fn new(account: UserAccount, address: impl Into<String>) -> Self {
        Self {
            account,
            address: address.into(),
        }
    }
}

/// A stored customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    /// Store-assigned ID.
    pub id: CustomerId,
    /// Owning account.
    pub account: UserAccount,
    /// Delivery address.
    pub address: String,
}
