//! Product entity.

use common::ProductId;

use crate::Money;
use crate::entity::Entity;
use crate::error::ValidationError;

/// A product that can be ordered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Money,
}

impl Entity for Product {
    type Id = ProductId;

    fn entity_type() -> &'static str {
        "Product"
    }

    fn id(&self) -> &ProductId {
        &self.id
    }
}

impl Product {
    /// Creates a validated product.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
    ) -> Result<Self, ValidationError> {
        let product = Self {
            id: id.into(),
            name: name.into(),
            price,
        };
        product.validate()?;
        Ok(product)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_empty() {
            return Err(ValidationError::IdRequired);
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::NameRequired);
        }
        self.price.validate_price()?;
        Ok(())
    }

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::NameRequired);
        }
        self.name = name;
        Ok(())
    }

    pub fn change_price(&mut self, price: Money) -> Result<(), ValidationError> {
        self.price = price.validate_price()?;
        Ok(())
    }
}
