//! Shared types for the customer, product and order domain.

mod types;

pub use types::{CustomerId, OrderId, OrderItemId, ProductId};
