//! Money value object.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// An amount in whole cents.
///
/// Prices of products and order items must pass [`Money::validate_price`].
/// Sums of valid prices are never negative, so totals are not re-checked.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub const fn from_dollars(dollars: i64) -> Self {
        Self(dollars * 100)
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    pub fn cents(self) -> i64 {
        self.0
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Returns the amount unchanged if it can be charged for a product.
    pub fn validate_price(self) -> Result<Self, ValidationError> {
        if self.is_negative() {
            return Err(ValidationError::NegativePrice { cents: self.0 });
        }
        Ok(self)
    }

    /// Unit price times quantity.
    pub fn multiply(self, quantity: u32) -> Self {
        Self(self.0 * i64::from(quantity))
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}${}.{:02}", abs / 100, abs % 100)
    }
}

impl std::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        Self(iter.map(|m| m.0).sum())
    }
}
