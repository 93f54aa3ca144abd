//! Customer entity, its address value object, events and handlers.

mod address;
mod entity;
mod events;
mod handlers;

pub use address::Address;
pub use entity::Customer;
pub use events::{
    AddressChangedData, AddressChangedEvent, CustomerCreatedData, CustomerCreatedEvent,
    CustomerRef,
};
pub use handlers::{
    FirstLogWhenCustomerIsCreatedHandler, LogWhenAddressIsChangedHandler,
    SecondLogWhenCustomerIsCreatedHandler,
};

use crate::repository::Repository;

/// Persistence port for customers.
pub trait CustomerRepository: Repository<Customer> {}

impl<T: Repository<Customer> + ?Sized> CustomerRepository for T {}
