//! Infrastructure layer for the store.
//!
//! This crate provides:
//! - SQLite implementations of the domain repository contracts
//! - Database connection and migration setup
//! - Configuration loaded from the environment and tracing initialization

pub mod config;
pub mod customer;
pub mod db;
pub mod error;
pub mod order;
pub mod product;
pub mod telemetry;

pub use config::{DatabaseConfig, TelemetryConfig};
pub use customer::SqliteCustomerRepository;
pub use error::{InfrastructureError, Result};
pub use order::SqliteOrderRepository;
pub use product::SqliteProductRepository;
