use domain::{RepositoryError, ValidationError};
use thiserror::Error;

/// Errors that can occur while setting up the database.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    /// A database error occurred.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A database migration error occurred.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// The configuration cannot work.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for infrastructure setup.
pub type Result<T> = std::result::Result<T, InfrastructureError>;

/// Wraps a sqlx error as a repository storage error, unchanged.
pub(crate) fn db_error(err: sqlx::Error) -> RepositoryError {
    RepositoryError::storage(err)
}

/// Builds a mapper for rows that fail entity validation.
pub(crate) fn invalid_record(entity: &'static str) -> impl FnOnce(ValidationError) -> RepositoryError {
    move |source| RepositoryError::InvalidRecord { entity, source }
}
