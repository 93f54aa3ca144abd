//! Domain layer for the store.
//!
//! This crate provides:
//! - Customer, Product and Order entities with their invariants
//! - Domain events and an in-process [`EventDispatcher`]
//! - Repository contracts implemented by the infrastructure layer

pub mod customer;
pub mod entity;
pub mod error;
pub mod event;
pub mod money;
pub mod order;
pub mod product;
pub mod repository;

pub use common::{CustomerId, OrderId, OrderItemId, ProductId};
pub use customer::{Address, Customer, CustomerRepository};
pub use entity::Entity;
pub use error::{RepositoryError, ValidationError};
pub use event::{DomainEvent, Event, EventDispatcher, EventError, EventHandler};
pub use money::Money;
pub use order::{Order, OrderItem, OrderRepository};
pub use product::{Product, ProductRepository};
pub use repository::Repository;
