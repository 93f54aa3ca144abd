//! Product domain events.

use chrono::{DateTime, Utc};
use common::ProductId;
use serde::{Deserialize, Serialize};

use crate::Money;
use crate::event::DomainEvent;

use super::Product;

/// Data for ProductCreatedEvent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCreatedData {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Money,
}

impl ProductCreatedData {
    /// Snapshots a product together with a free-text description.
    pub fn from_product(product: &Product, description: impl Into<String>) -> Self {
        Self {
            id: product.id().clone(),
            name: product.name().to_string(),
            description: description.into(),
            price: product.price(),
        }
    }
}

/// A product was added to the catalogue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreatedEvent {
    date_time_occurred: DateTime<Utc>,
    event_data: ProductCreatedData,
}

impl ProductCreatedEvent {
    pub const NAME: &'static str = "ProductCreatedEvent";

    pub fn new(event_data: ProductCreatedData) -> Self {
        Self {
            date_time_occurred: Utc::now(),
            event_data,
        }
    }

    pub fn event_data(&self) -> &ProductCreatedData {
        &self.event_data
    }
}

impl DomainEvent for ProductCreatedEvent {
    fn event_name(&self) -> &'static str {
        Self::NAME
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.date_time_occurred
    }
}
