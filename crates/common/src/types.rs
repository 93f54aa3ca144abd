use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Declares a transparent string identifier.
///
/// Identifiers are opaque strings chosen by the caller (e.g. `"123"`) or
/// generated from a random UUID. Emptiness is allowed at this level; the
/// entities that own an identifier decide whether an empty one is valid.
macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates an identifier from any string-like value.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Creates a new random identifier.
            pub fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns true if the identifier is empty or only whitespace.
            pub fn is_empty(&self) -> bool {
                self.0.trim().is_empty()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// Unique identifier for a customer.
    CustomerId
);

string_id!(
    /// Product identifier (SKU).
    ProductId
);

string_id!(
    /// Unique identifier for an order aggregate.
    OrderId
);

string_id!(
    /// Identifier of a line item, unique within its order.
    OrderItemId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_creates_unique_ids() {
        let id1 = OrderId::generate();
        let id2 = OrderId::generate();
        assert_ne!(id1, id2);
        assert!(!id1.is_empty());
    }

    #[test]
    fn string_conversion() {
        let id = ProductId::new("SKU-001");
        assert_eq!(id.as_str(), "SKU-001");

        let id2: ProductId = "SKU-002".into();
        assert_eq!(id2.to_string(), "SKU-002");
    }

    #[test]
    fn blank_ids_are_empty() {
        assert!(CustomerId::new("").is_empty());
        assert!(CustomerId::new("   ").is_empty());
        assert!(!CustomerId::new("123").is_empty());
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = OrderItemId::new("1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"1\"");
        let deserialized: OrderItemId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
