//! User validation and contact records.

use tally_types::User;

use crate::{Error, Result};

/// Address given to a [`Contact`] before one is set.
pub const UNSPECIFIED_ADDRESS: &str = "unspecified";

/// Checks that a user can be saved.
///
/// Name is checked before address, so a user missing both reports the name.
///
/// # Errors
///
/// Returns [`Error::EmptyField`] naming the first empty field.
pub fn validate_for_save(user: &User) -> Result<()> {
    validate_field(user, &user.name, "Name")?;
    validate_field(user, &user.address, "Address")?;
    Ok(())
}

fn validate_field(user: &User, value: &str, field: &'static str) -> Result<()> {
    if value.is_empty() {
        tracing::debug!(id = %user.id, field, "user failed validation");
        return Err(Error::EmptyField { id: user.id, field });
    }
    Ok(())
}

/// A named contact whose address changes are logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    name: String,
    address: String,
}

impl Contact {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: UNSPECIFIED_ADDRESS.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Replaces the address and returns the previous one.
    pub fn set_address(&mut self, address: impl Into<String>) -> String {
        let new = address.into();
        tracing::info!(
            name = %self.name,
            old = %self.address,
            new = %new,
            "address changed"
        );
        std::mem::replace(&mut self.address, new)
    }
}
