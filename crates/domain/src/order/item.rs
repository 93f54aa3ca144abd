//! Order line item.

use common::{OrderItemId, ProductId};
use serde::{Deserialize, Serialize};

use crate::Money;
use crate::error::ValidationError;

/// An item in an order.
///
/// Name and price are copied from the product when the item is created, so
/// later product changes do not affect existing orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    id: OrderItemId,
    name: String,
    price: Money,
    product_id: ProductId,
    quantity: u32,
}

impl OrderItem {
    /// Creates a validated order item.
    pub fn new(
        id: impl Into<OrderItemId>,
        name: impl Into<String>,
        price: Money,
        product_id: impl Into<ProductId>,
        quantity: u32,
    ) -> Result<Self, ValidationError> {
        let item = Self {
            id: id.into(),
            name: name.into(),
            price,
            product_id: product_id.into(),
            quantity,
        };
        item.validate()?;
        Ok(item)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_empty() {
            return Err(ValidationError::IdRequired);
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::NameRequired);
        }
        if self.product_id.is_empty() {
            return Err(ValidationError::ProductIdRequired);
        }
        if self.quantity == 0 {
            return Err(ValidationError::InvalidQuantity);
        }
        self.price.validate_price()?;
        Ok(())
    }

    pub fn id(&self) -> &OrderItemId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price.
    pub fn price(&self) -> Money {
        self.price
    }

    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns price × quantity.
    pub fn subtotal(&self) -> Money {
        self.price.multiply(self.quantity)
    }
}
