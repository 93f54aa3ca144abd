//! Configuration loaded from environment variables.

use crate::error::{InfrastructureError, Result};

/// Database configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `DATABASE_URL`: SQLite connection string (default: `"sqlite::memory:"`)
/// - `DATABASE_MAX_CONNECTIONS`: pool size (default: `1`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            url: std::env::var("DATABASE_URL").unwrap_or(defaults.url),
            max_connections: std::env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|n| n.parse().ok())
                .unwrap_or(defaults.max_connections),
        }
    }

    /// A private in-memory database.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Returns true if the URL points to an in-memory database.
    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }

    /// Checks that the pool can be built from this configuration.
    ///
    /// Every connection to `sqlite::memory:` opens its own empty database, so
    /// an in-memory pool must hold exactly one connection.
    pub fn validate(&self) -> Result<()> {
        if self.max_connections == 0 {
            return Err(InfrastructureError::Config(
                "DATABASE_MAX_CONNECTIONS must be at least 1".to_string(),
            ));
        }
        if self.is_in_memory() && self.max_connections != 1 {
            return Err(InfrastructureError::Config(format!(
                "in-memory database requires exactly 1 connection, got {}",
                self.max_connections
            )));
        }
        Ok(())
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        }
    }
}

/// Logging configuration.
///
/// Reads from environment variables:
/// - `RUST_LOG`: tracing filter directive (default: `"info"`)
/// - `LOG_FORMAT`: `json` for JSON lines, anything else for plain text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub json: bool,
}

impl TelemetryConfig {
    pub fn from_env() -> Self {
        Self {
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            json: std::env::var("LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json")),
        }
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json: false,
        }
    }
}
