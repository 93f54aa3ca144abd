//! Connection pool and schema setup.

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};

use crate::config::DatabaseConfig;
use crate::error::Result;

/// Opens a connection pool with foreign keys enforced.
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool> {
    config.validate()?;

    let mut options = SqliteConnectOptions::from_str(&config.url)?
        .create_if_missing(true)
        .foreign_keys(true);
    // Readers keep a stable snapshot while a writer commits.
    if !config.is_in_memory() {
        options = options.journal_mode(SqliteJournalMode::Wal);
    }

    // An in-memory database lives as long as its connection, so connections
    // are never recycled.
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    tracing::debug!(url = %config.url, max_connections = config.max_connections, "database pool opened");
    Ok(pool)
}

/// Runs the embedded migrations.
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    sqlx::migrate!("../../migrations").run(pool).await?;
    Ok(())
}

/// Opens a pool and brings the schema up to date.
pub async fn init(config: &DatabaseConfig) -> Result<SqlitePool> {
    let pool = connect(config).await?;
    run_migrations(&pool).await?;
    tracing::info!("database ready");
    Ok(pool)
}
