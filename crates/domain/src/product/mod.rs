//! Product entity, events and handlers.

mod entity;
mod events;
mod handlers;

pub use entity::Product;
pub use events::{ProductCreatedData, ProductCreatedEvent};
pub use handlers::SendEmailWhenProductIsCreatedHandler;

use crate::repository::Repository;

/// Persistence port for products.
pub trait ProductRepository: Repository<Product> {}

impl<T: Repository<Product> + ?Sized> ProductRepository for T {}
