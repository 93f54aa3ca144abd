//! Handlers reacting to product events.

use crate::event::{Event, EventError, EventHandler};

/// Announces a new product by e-mail.
///
/// Delivery is simulated with a log line.
#[derive(Debug, Default)]
pub struct SendEmailWhenProductIsCreatedHandler;

impl EventHandler<Event> for SendEmailWhenProductIsCreatedHandler {
    fn name(&self) -> &'static str {
        "SendEmailWhenProductIsCreatedHandler"
    }

    fn handle(&self, event: &Event) -> Result<(), EventError> {
        let Event::ProductCreated(created) = event else {
            return Err(EventError::unexpected(self.name(), event));
        };
        let data = created.event_data();
        tracing::info!(
            product_id = %data.id,
            product_name = %data.name,
            price = %data.price,
            "sending product announcement e-mail"
        );
        Ok(())
    }
}
