//! Handlers reacting to customer events.

use crate::event::{Event, EventError, EventHandler};

/// First of two log lines written when a customer is created.
#[derive(Debug, Default)]
pub struct FirstLogWhenCustomerIsCreatedHandler;

impl EventHandler<Event> for FirstLogWhenCustomerIsCreatedHandler {
    fn name(&self) -> &'static str {
        "FirstLogWhenCustomerIsCreatedHandler"
    }

    fn handle(&self, event: &Event) -> Result<(), EventError> {
        let Event::CustomerCreated(created) = event else {
            return Err(EventError::unexpected(self.name(), event));
        };
        tracing::info!(
            customer_id = %created.event_data().id,
            "first log line for event: CustomerCreated"
        );
        Ok(())
    }
}

/// Second of two log lines written when a customer is created.
#[derive(Debug, Default)]
pub struct SecondLogWhenCustomerIsCreatedHandler;

impl EventHandler<Event> for SecondLogWhenCustomerIsCreatedHandler {
    fn name(&self) -> &'static str {
        "SecondLogWhenCustomerIsCreatedHandler"
    }

    fn handle(&self, event: &Event) -> Result<(), EventError> {
        let Event::CustomerCreated(created) = event else {
            return Err(EventError::unexpected(self.name(), event));
        };
        tracing::info!(
            customer_id = %created.event_data().id,
            "second log line for event: CustomerCreated"
        );
        Ok(())
    }
}

/// Logs the new address of a customer.
#[derive(Debug, Default)]
pub struct LogWhenAddressIsChangedHandler;

impl EventHandler<Event> for LogWhenAddressIsChangedHandler {
    fn name(&self) -> &'static str {
        "LogWhenAddressIsChangedHandler"
    }

    fn handle(&self, event: &Event) -> Result<(), EventError> {
        let Event::AddressChanged(changed) = event else {
            return Err(EventError::unexpected(self.name(), event));
        };
        let data = changed.event_data();
        let address = serde_json::to_string(&data.address)?;
        tracing::info!(
            customer_id = %data.customer.id,
            customer_name = %data.customer.name,
            %address,
            "customer address changed"
        );
        Ok(())
    }
}
