//! Order aggregate implementation.

use std::collections::HashSet;

use common::{CustomerId, OrderId};

use crate::Money;
use crate::entity::Entity;
use crate::error::ValidationError;

use super::OrderItem;

/// Order aggregate root.
///
/// Owns its items exclusively; an order always has at least one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    id: OrderId,
    customer_id: CustomerId,
    items: Vec<OrderItem>,
}

impl Entity for Order {
    type Id = OrderId;

    fn entity_type() -> &'static str {
        "Order"
    }

    fn id(&self) -> &OrderId {
        &self.id
    }
}

impl Order {
    /// Creates a validated order.
    pub fn new(
        id: impl Into<OrderId>,
        customer_id: impl Into<CustomerId>,
        items: Vec<OrderItem>,
    ) -> Result<Self, ValidationError> {
        let order = Self {
            id: id.into(),
            customer_id: customer_id.into(),
            items,
        };
        order.validate()?;
        Ok(order)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_empty() {
            return Err(ValidationError::IdRequired);
        }
        if self.customer_id.is_empty() {
            return Err(ValidationError::CustomerIdRequired);
        }
        validate_items(&self.items)
    }
}

/// An order needs at least one item, and item ids are unique within it.
fn validate_items(items: &[OrderItem]) -> Result<(), ValidationError> {
    if items.is_empty() {
        return Err(ValidationError::ItemsRequired);
    }
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if !seen.insert(item.id()) {
            return Err(ValidationError::DuplicateItemId {
                id: item.id().to_string(),
            });
        }
    }
    Ok(())
}

// Query methods
impl Order {
    pub fn id(&self) -> &OrderId {
        &self.id
    }

    pub fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    /// Returns the items in order.
    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    /// Returns the sum of all item subtotals.
    pub fn total(&self) -> Money {
        self.items.iter().map(OrderItem::subtotal).sum()
    }

    /// Returns the total quantity of all items.
    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(OrderItem::quantity).sum()
    }
}

// Mutations
impl Order {
    /// Moves the order to another customer.
    pub fn change_customer_id(
        &mut self,
        customer_id: impl Into<CustomerId>,
    ) -> Result<(), ValidationError> {
        let customer_id = customer_id.into();
        if customer_id.is_empty() {
            return Err(ValidationError::CustomerIdRequired);
        }
        self.customer_id = customer_id;
        Ok(())
    }

    /// Replaces the whole item list.
    pub fn change_items(&mut self, items: Vec<OrderItem>) -> Result<(), ValidationError> {
        validate_items(&items)?;
        self.items = items;
        Ok(())
    }
}
