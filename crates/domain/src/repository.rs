//! Repository contracts.
//!
//! Implementations live in the infrastructure layer. Every repository has the
//! same shape regardless of the entity it stores.

use async_trait::async_trait;

use crate::entity::Entity;
use crate::error::RepositoryError;

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

/// Persistence port for an entity type.
///
/// All implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Persists a new entity.
    async fn create(&self, entity: &T) -> Result<()>;

    /// Overwrites the persisted state of an existing entity.
    ///
    /// Fails with [`RepositoryError::NotFound`] if the entity was never created.
    async fn update(&self, entity: &T) -> Result<()>;

    /// Loads an entity by id.
    ///
    /// A missing row is reported as [`RepositoryError::NotFound`], never as an
    /// empty value.
    async fn find(&self, id: &T::Id) -> Result<T>;

    /// Loads every entity, in insertion order.
    async fn find_all(&self) -> Result<Vec<T>>;
}
