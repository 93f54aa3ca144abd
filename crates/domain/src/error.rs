//! Domain error types.

use thiserror::Error;

/// Invariant violations raised by entity constructors and mutators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Entity id is empty.
    #[error("Id is required")]
    IdRequired,

    /// Entity name is empty.
    #[error("Name is required")]
    NameRequired,

    /// Customer activated without an address.
    #[error("Address is mandatory to activate a customer")]
    AddressRequiredToActivate,

    /// Order without a customer.
    #[error("CustomerId is required")]
    CustomerIdRequired,

    /// Order without items.
    #[error("Items are required")]
    ItemsRequired,

    /// Two items of one order share an id.
    #[error("Item id {id} is used more than once")]
    DuplicateItemId { id: String },

    /// Order item without a product.
    #[error("ProductId is required")]
    ProductIdRequired,

    /// Order item quantity is zero.
    #[error("Quantity must be greater than 0")]
    InvalidQuantity,

    /// Negative product or item price.
    #[error("Price must be greater than or equal to 0, got {cents} cents")]
    NegativePrice { cents: i64 },

    #[error("Street is required")]
    StreetRequired,

    #[error("Number is required")]
    NumberRequired,

    #[error("Zip is required")]
    ZipRequired,

    #[error("City is required")]
    CityRequired,
}

/// Errors returned by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No row matches the requested id.
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: String },

    /// A persisted row could not be turned back into a valid entity.
    #[error("Invalid persisted {entity}: {source}")]
    InvalidRecord {
        entity: &'static str,
        #[source]
        source: ValidationError,
    },

    /// The underlying store failed. The original error is kept as the source.
    #[error("Storage error: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl RepositoryError {
    /// Creates a not-found error for the given entity name and id.
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// Wraps a storage-level error.
    pub fn storage(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Storage(err.into())
    }

    /// Returns true for [`RepositoryError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
