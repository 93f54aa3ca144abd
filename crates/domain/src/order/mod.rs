//! Order aggregate and related types.

mod aggregate;
mod item;

pub use aggregate::Order;
pub use item::OrderItem;

use crate::repository::Repository;

/// Persistence port for orders.
///
/// Implementations persist the order and its items as one unit.
pub trait OrderRepository: Repository<Order> {}

impl<T: Repository<Order> + ?Sized> OrderRepository for T {}
