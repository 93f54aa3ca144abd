use std::collections::HashMap;
use std::sync::Arc;

use super::{DomainEvent, EventError, EventHandler};

/// Registered handlers, keyed by event name.
pub type HandlerRegistry<E> = HashMap<String, Vec<Arc<dyn EventHandler<E>>>>;

/// In-process publish/subscribe registry.
///
/// Handlers are kept per event name in registration order. The same handler
/// may be registered more than once and is then invoked once per entry.
/// Handlers are identified by the `Arc` they were registered with.
pub struct EventDispatcher<E: DomainEvent> {
    handlers: HandlerRegistry<E>,
}

impl<E: DomainEvent> Default for EventDispatcher<E> {
    fn default() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }
}

impl<E: DomainEvent> EventDispatcher<E> {
    /// Creates a dispatcher with no handlers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the full registry.
    pub fn event_handlers(&self) -> &HandlerRegistry<E> {
        &self.handlers
    }

    /// Returns the handlers registered for an event name, if the name is known.
    pub fn handlers_for(&self, event_name: &str) -> Option<&[Arc<dyn EventHandler<E>>]> {
        self.handlers.get(event_name).map(Vec::as_slice)
    }

    /// Returns true if this exact handler instance is registered for the event name.
    pub fn is_registered<H: EventHandler<E> + ?Sized>(
        &self,
        event_name: &str,
        handler: &Arc<H>,
    ) -> bool {
        self.handlers
            .get(event_name)
            .is_some_and(|list| list.iter().any(|h| same_handler(h, handler)))
    }

    /// Appends a handler to the list for `event_name`.
    pub fn register(&mut self, event_name: impl Into<String>, handler: Arc<dyn EventHandler<E>>) {
        let event_name = event_name.into();
        tracing::debug!(event = %event_name, handler = handler.name(), "handler registered");
        self.handlers.entry(event_name).or_default().push(handler);
    }

    /// Removes the first registration of `handler` under `event_name`.
    ///
    /// Unknown names and handlers are ignored. The (possibly empty) list for
    /// the name is kept.
    pub fn unregister<H: EventHandler<E> + ?Sized>(&mut self, event_name: &str, handler: &Arc<H>) {
        let Some(list) = self.handlers.get_mut(event_name) else {
            return;
        };
        if let Some(index) = list.iter().position(|h| same_handler(h, handler)) {
            let removed = list.remove(index);
            tracing::debug!(event = %event_name, handler = removed.name(), "handler unregistered");
        }
    }

    /// Removes every handler for every event name.
    pub fn unregister_all(&mut self) {
        self.handlers.clear();
    }

    /// Invokes every handler registered under the event's name, in order.
    ///
    /// Stops at the first handler error and returns it; later handlers are
    /// not invoked for this event.
    pub fn notify(&self, event: &E) -> Result<(), EventError> {
        let event_name = event.event_name();
        let Some(handlers) = self.handlers.get(event_name) else {
            return Ok(());
        };

        tracing::debug!(event = event_name, handlers = handlers.len(), "dispatching event");
        metrics::counter!("domain_events_dispatched", "event" => event_name).increment(1);

        for handler in handlers {
            handler.handle(event).inspect_err(|e| {
                tracing::warn!(event = event_name, handler = handler.name(), error = %e, "event handler failed");
            })?;
        }

        Ok(())
    }
}

fn same_handler<E: DomainEvent, H: EventHandler<E> + ?Sized>(
    registered: &Arc<dyn EventHandler<E>>,
    handler: &Arc<H>,
) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(registered), Arc::as_ptr(handler))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use std::sync::Mutex;

    #[derive(Debug)]
    struct TestEvent {
        name: &'static str,
        occurred_at: DateTime<Utc>,
    }

    impl TestEvent {
        fn named(name: &'static str) -> Self {
            Self {
                name,
                occurred_at: Utc::now(),
            }
        }
    }

    impl DomainEvent for TestEvent {
        fn event_name(&self) -> &'static str {
            self.name
        }

        fn occurred_at(&self) -> DateTime<Utc> {
            self.occurred_at
        }
    }

    type CallLog = Arc<Mutex<Vec<&'static str>>>;

    struct RecordingHandler {
        label: &'static str,
        calls: CallLog,
    }

    impl RecordingHandler {
        fn new(label: &'static str, calls: &CallLog) -> Arc<Self> {
            Arc::new(Self {
                label,
                calls: Arc::clone(calls),
            })
        }
    }

    impl EventHandler<TestEvent> for RecordingHandler {
        fn name(&self) -> &'static str {
            self.label
        }

        fn handle(&self, _event: &TestEvent) -> Result<(), EventError> {
            self.calls.lock().unwrap().push(self.label);
            Ok(())
        }
    }

    struct FailingHandler;

    impl EventHandler<TestEvent> for FailingHandler {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn handle(&self, _event: &TestEvent) -> Result<(), EventError> {
            Err(EventError::HandlerFailed {
                handler: "failing",
                message: "boom".to_string(),
            })
        }
    }

    #[test]
    fn register_creates_list_for_event_name() {
        let calls = CallLog::default();
        let mut dispatcher = EventDispatcher::<TestEvent>::new();
        let handler = RecordingHandler::new("h1", &calls);

        dispatcher.register("ProductCreatedEvent", handler.clone());

        let handlers = dispatcher.handlers_for("ProductCreatedEvent").unwrap();
        assert_eq!(handlers.len(), 1);
        assert!(dispatcher.is_registered("ProductCreatedEvent", &handler));
    }

    #[test]
    fn notify_invokes_handlers_in_registration_order() {
        let calls = CallLog::default();
        let mut dispatcher = EventDispatcher::<TestEvent>::new();
        dispatcher.register("Created", RecordingHandler::new("h1", &calls));
        dispatcher.register("Created", RecordingHandler::new("h2", &calls));

        dispatcher.notify(&TestEvent::named("Created")).unwrap();

        assert_eq!(*calls.lock().unwrap(), vec!["h1", "h2"]);
    }

    #[test]
    fn duplicate_registration_invokes_twice() {
        let calls = CallLog::default();
        let mut dispatcher = EventDispatcher::<TestEvent>::new();
        let handler = RecordingHandler::new("h1", &calls);
        dispatcher.register("Created", handler.clone());
        dispatcher.register("Created", handler.clone());

        dispatcher.notify(&TestEvent::named("Created")).unwrap();

        assert_eq!(*calls.lock().unwrap(), vec!["h1", "h1"]);
    }

    #[test]
    fn notify_without_handlers_is_a_no_op() {
        let dispatcher = EventDispatcher::<TestEvent>::new();
        assert!(dispatcher.notify(&TestEvent::named("Unknown")).is_ok());
    }

    #[test]
    fn notify_only_reaches_handlers_for_that_name() {
        let calls = CallLog::default();
        let mut dispatcher = EventDispatcher::<TestEvent>::new();
        dispatcher.register("Created", RecordingHandler::new("created", &calls));
        dispatcher.register("Changed", RecordingHandler::new("changed", &calls));

        dispatcher.notify(&TestEvent::named("Changed")).unwrap();

        assert_eq!(*calls.lock().unwrap(), vec!["changed"]);
    }

    #[test]
    fn unregister_removes_only_that_handler() {
        let calls = CallLog::default();
        let mut dispatcher = EventDispatcher::<TestEvent>::new();
        let h1 = RecordingHandler::new("h1", &calls);
        let h2 = RecordingHandler::new("h2", &calls);
        dispatcher.register("Created", h1.clone());
        dispatcher.register("Created", h2.clone());

        dispatcher.unregister("Created", &h1);
        dispatcher.notify(&TestEvent::named("Created")).unwrap();

        assert_eq!(*calls.lock().unwrap(), vec!["h2"]);
        assert!(!dispatcher.is_registered("Created", &h1));
        assert!(dispatcher.is_registered("Created", &h2));
    }

    #[test]
    fn unregister_last_handler_keeps_empty_list() {
        let calls = CallLog::default();
        let mut dispatcher = EventDispatcher::<TestEvent>::new();
        let handler = RecordingHandler::new("h1", &calls);
        dispatcher.register("ProductCreatedEvent", handler.clone());

        dispatcher.unregister("ProductCreatedEvent", &handler);

        let handlers = dispatcher.handlers_for("ProductCreatedEvent").unwrap();
        assert!(handlers.is_empty());
    }

    #[test]
    fn unregister_removes_one_of_duplicate_entries() {
        let calls = CallLog::default();
        let mut dispatcher = EventDispatcher::<TestEvent>::new();
        let handler = RecordingHandler::new("h1", &calls);
        dispatcher.register("Created", handler.clone());
        dispatcher.register("Created", handler.clone());

        dispatcher.unregister("Created", &handler);

        assert_eq!(dispatcher.handlers_for("Created").unwrap().len(), 1);
    }

    #[test]
    fn unregister_unknown_is_a_no_op() {
        let calls = CallLog::default();
        let mut dispatcher = EventDispatcher::<TestEvent>::new();
        let registered = RecordingHandler::new("h1", &calls);
        let stranger = RecordingHandler::new("h2", &calls);
        dispatcher.register("Created", registered.clone());

        dispatcher.unregister("Unknown", &registered);
        dispatcher.unregister("Created", &stranger);

        assert_eq!(dispatcher.handlers_for("Created").unwrap().len(), 1);
        assert!(dispatcher.handlers_for("Unknown").is_none());
    }

    #[test]
    fn unregister_all_clears_registry() {
        let calls = CallLog::default();
        let mut dispatcher = EventDispatcher::<TestEvent>::new();
        dispatcher.register("Created", RecordingHandler::new("h1", &calls));
        dispatcher.register("Changed", RecordingHandler::new("h2", &calls));

        dispatcher.unregister_all();

        assert!(dispatcher.event_handlers().is_empty());
        assert!(dispatcher.handlers_for("Created").is_none());
        assert!(dispatcher.handlers_for("Changed").is_none());
    }

    #[test]
    fn failing_handler_stops_notification() {
        let calls = CallLog::default();
        let mut dispatcher = EventDispatcher::<TestEvent>::new();
        dispatcher.register("Created", RecordingHandler::new("h1", &calls));
        dispatcher.register("Created", Arc::new(FailingHandler));
        dispatcher.register("Created", RecordingHandler::new("h3", &calls));

        let result = dispatcher.notify(&TestEvent::named("Created"));

        assert!(matches!(result, Err(EventError::HandlerFailed { .. })));
        assert_eq!(*calls.lock().unwrap(), vec!["h1"]);
    }
}
