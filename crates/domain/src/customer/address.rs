//! Address value object.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A postal address.
///
/// Immutable once constructed; to change a customer's address, build a new
/// one and pass it to `Customer::change_address`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    street: String,
    number: u32,
    zip: String,
    city: String,
}

impl Address {
    /// Creates a validated address.
    pub fn new(
        street: impl Into<String>,
        number: u32,
        zip: impl Into<String>,
        city: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let address = Self {
            street: street.into(),
            number,
            zip: zip.into(),
            city: city.into(),
        };
        address.validate()?;
        Ok(address)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.street.trim().is_empty() {
            return Err(ValidationError::StreetRequired);
        }
        if self.number == 0 {
            return Err(ValidationError::NumberRequired);
        }
        if self.zip.trim().is_empty() {
            return Err(ValidationError::ZipRequired);
        }
        if self.city.trim().is_empty() {
            return Err(ValidationError::CityRequired);
        }
        Ok(())
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn zip(&self) -> &str {
        &self.zip
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}, {} {}", self.street, self.number, self.zip, self.city)
    }
}
