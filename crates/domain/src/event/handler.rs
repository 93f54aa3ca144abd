use super::{DomainEvent, EventError};

/// A unit of side-effecting logic invoked with a domain event.
///
/// Handlers are registered on an [`EventDispatcher`](super::EventDispatcher)
/// under an event name and are called synchronously by `notify`.
pub trait EventHandler<E: DomainEvent>: Send + Sync {
    /// Returns the handler name, used in logs and errors.
    fn name(&self) -> &'static str;

    /// Handles a single event.
    fn handle(&self, event: &E) -> Result<(), EventError>;
}
