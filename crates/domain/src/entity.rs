//! Core entity trait.

/// An object with a stable identity.
///
/// Two entities with the same id are the same entity, even if their other
/// attributes differ. Value objects (like `Address`) do not implement this.
pub trait Entity: Send + Sync {
    /// Identifier type of this entity.
    type Id: Send + Sync + std::fmt::Display;

    /// Returns the entity type name, used in logs and error messages.
    fn entity_type() -> &'static str;

    /// Returns the entity's identifier.
    fn id(&self) -> &Self::Id;
}
