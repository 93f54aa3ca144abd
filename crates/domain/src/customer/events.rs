//! Customer domain events.

use chrono::{DateTime, Utc};
use common::CustomerId;
use serde::{Deserialize, Serialize};

use crate::event::DomainEvent;

use super::{Address, Customer};

/// Data for CustomerCreatedEvent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerCreatedData {
    pub id: CustomerId,
    pub name: String,
}

impl From<&Customer> for CustomerCreatedData {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id().clone(),
            name: customer.name().to_string(),
        }
    }
}

/// A customer was registered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerCreatedEvent {
    date_time_occurred: DateTime<Utc>,
    event_data: CustomerCreatedData,
}

impl CustomerCreatedEvent {
    pub const NAME: &'static str = "CustomerCreatedEvent";

    /// Creates the event, stamping it with the current time.
    pub fn new(event_data: CustomerCreatedData) -> Self {
        Self {
            date_time_occurred: Utc::now(),
            event_data,
        }
    }

    pub fn event_data(&self) -> &CustomerCreatedData {
        &self.event_data
    }
}

impl DomainEvent for CustomerCreatedEvent {
    fn event_name(&self) -> &'static str {
        Self::NAME
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.date_time_occurred
    }
}

/// Customer reference carried by address change events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRef {
    pub id: CustomerId,
    pub name: String,
}

/// Data for AddressChangedEvent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressChangedData {
    pub customer: CustomerRef,
    pub address: Address,
}

impl AddressChangedData {
    /// Snapshots the customer and its current address.
    ///
    /// Returns None if the customer has no address yet.
    pub fn from_customer(customer: &Customer) -> Option<Self> {
        let address = customer.address()?.clone();
        Some(Self {
            customer: CustomerRef {
                id: customer.id().clone(),
                name: customer.name().to_string(),
            },
            address,
        })
    }
}

/// A customer's address was changed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressChangedEvent {
    date_time_occurred: DateTime<Utc>,
    event_data: AddressChangedData,
}

impl AddressChangedEvent {
    pub const NAME: &'static str = "AddressChangedEvent";

    /// Creates the event, stamping it with the current time.
    pub fn new(event_data: AddressChangedData) -> Self {
        Self {
            date_time_occurred: Utc::now(),
            event_data,
        }
    }

    pub fn event_data(&self) -> &AddressChangedData {
        &self.event_data
    }
}

impl DomainEvent for AddressChangedEvent {
    fn event_name(&self) -> &'static str {
        Self::NAME
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.date_time_occurred
    }
}
