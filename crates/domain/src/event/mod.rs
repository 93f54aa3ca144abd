//! Domain events and the in-process event dispatcher.

mod dispatcher;
mod handler;

pub use dispatcher::EventDispatcher;
pub use handler::EventHandler;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::customer::{AddressChangedEvent, CustomerCreatedEvent};
use crate::product::ProductCreatedEvent;

/// Trait for domain events.
///
/// Domain events represent facts that have happened in the domain.
/// They are immutable and carry a snapshot of the data they describe.
pub trait DomainEvent: Send + Sync + std::fmt::Debug {
    /// Returns the event name handlers are registered under.
    fn event_name(&self) -> &'static str;

    /// Returns when the event was raised.
    fn occurred_at(&self) -> DateTime<Utc>;
}

/// Every event raised by this domain.
#[derive(Debug, Clone)]
pub enum Event {
    CustomerCreated(CustomerCreatedEvent),
    AddressChanged(AddressChangedEvent),
    ProductCreated(ProductCreatedEvent),
}

impl DomainEvent for Event {
    fn event_name(&self) -> &'static str {
        match self {
            Event::CustomerCreated(e) => e.event_name(),
            Event::AddressChanged(e) => e.event_name(),
            Event::ProductCreated(e) => e.event_name(),
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            Event::CustomerCreated(e) => e.occurred_at(),
            Event::AddressChanged(e) => e.occurred_at(),
            Event::ProductCreated(e) => e.occurred_at(),
        }
    }
}

impl From<CustomerCreatedEvent> for Event {
    fn from(event: CustomerCreatedEvent) -> Self {
        Event::CustomerCreated(event)
    }
}

impl From<AddressChangedEvent> for Event {
    fn from(event: AddressChangedEvent) -> Self {
        Event::AddressChanged(event)
    }
}

impl From<ProductCreatedEvent> for Event {
    fn from(event: ProductCreatedEvent) -> Self {
        Event::ProductCreated(event)
    }
}

/// Errors raised while handling an event.
#[derive(Debug, Error)]
pub enum EventError {
    /// A handler was notified with an event type it does not handle.
    #[error("Handler {handler} cannot handle {event}")]
    UnexpectedEvent {
        handler: &'static str,
        event: &'static str,
    },

    /// Failed to serialize event data.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A handler's side effect failed.
    #[error("Handler {handler} failed: {message}")]
    HandlerFailed {
        handler: &'static str,
        message: String,
    },
}

impl EventError {
    /// Creates an unexpected-event error for the given handler.
    pub fn unexpected(handler: &'static str, event: &impl DomainEvent) -> Self {
        Self::UnexpectedEvent {
            handler,
            event: event.event_name(),
        }
    }
}
