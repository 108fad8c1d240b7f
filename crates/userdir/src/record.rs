//! Core record type for userdir.
//!
//! This module defines the user record stored in the directory and the
//! identifier minting used when a record is first created.

use serde::{Deserialize, Serialize};

/// A single user in the directory.
///
/// The `id` is minted once at creation time and never changes; it is the
/// sole key used to match records on update and delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Opaque unique identifier, assigned at creation.
    pub id: String,

    /// The user's name.
    pub name: String,

    /// The user's email address.
    pub email: String,

    /// The user's contact number (or similar free text).
    pub contact: String,
}

impl Record {
    /// Create a new record with a freshly minted identifier.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        contact: impl Into<String>,
    ) -> Self {
        Self {
            id: mint_id(),
            name: name.into(),
            email: email.into(),
            contact: contact.into(),
        }
    }

    /// Create a record with an existing identifier.
    ///
    /// Used when an edit produces a new value for an existing row.
    #[must_use]
    pub fn with_id(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        contact: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            contact: contact.into(),
        }
    }
}

/// Mint a fresh record identifier.
#[must_use]
pub fn mint_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_mints_id() {
        let record = Record::new("Ada", "ada@example.com", "555-0100");

        assert!(!record.id.is_empty());
        assert_eq!(record.name, "Ada");
        assert_eq!(record.email, "ada@example.com");
        assert_eq!(record.contact, "555-0100");
    }

    #[test]
    fn test_new_ids_are_unique() {
        let a = Record::new("A", "a@x.com", "1");
        let b = Record::new("A", "a@x.com", "1");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_with_id_preserves_id() {
        let record = Record::with_id("fixed-id", "Ada", "ada@example.com", "555-0100");
        assert_eq!(record.id, "fixed-id");
    }

    #[test]
    fn test_mint_id_unique() {
        let id1 = mint_id();
        let id2 = mint_id();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_serialization_round_trip() {
        let record = Record::new("Ada", "ada@example.com", "555-0100");

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: Record = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }

    #[test]
    fn test_deserializes_plain_object() {
        let json = r#"{"id":"abc","name":"Ada","email":"ada@example.com","contact":"555-0100"}"#;
        let record: Record = serde_json::from_str(json).unwrap();

        assert_eq!(record.id, "abc");
        assert_eq!(record.name, "Ada");
    }
}
