//! ContactId value object and identifier generation.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

/// A type-safe wrapper for contact IDs.
///
/// IDs are validated at construction time and cannot be empty.
///
/// # Example
///
/// ```
/// use contact_form::domain::ContactId;
///
/// let id = ContactId::new("V1StGXR8_Z5jdHi6B").unwrap();
/// assert_eq!(id.as_str(), "V1StGXR8_Z5jdHi6B");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContactId(String);

impl ContactId {
    /// Create a new ContactId, validating that it's not empty.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyId` if the provided ID is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValidationError::EmptyId);
        }
        Ok(Self(id))
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Serde support - serialize as string
impl Serialize for ContactId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for ContactId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ContactId::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Source of fresh contact identifiers.
///
/// Each call must return a new token. The form assumes uniqueness and never
/// checks generated IDs against earlier ones.
pub trait IdGenerator {
    /// Produce a new identifier.
    fn generate(&self) -> ContactId;
}

/// Generates random v4 UUIDs rendered without hyphens (32 hex characters).
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> ContactId {
        ContactId(Uuid::new_v4().simple().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_contact_id_valid() {
        let id = ContactId::new("contact_123").unwrap();
        assert_eq!(id.as_str(), "contact_123");
    }

    #[test]
    fn test_contact_id_rejects_empty() {
        assert_eq!(ContactId::new(""), Err(ValidationError::EmptyId));
    }

    #[test]
    fn test_contact_id_serialization() {
        let id = ContactId::new("contact_123").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"contact_123\"");
    }

    #[test]
    fn test_contact_id_deserialization_empty_fails() {
        let result: Result<ContactId, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_uuid_generator_shape() {
        let id = UuidGenerator.generate();
        assert_eq!(id.as_str().len(), 32);
        assert!(id.as_str().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_uuid_generator_produces_distinct_ids() {
        let ids: HashSet<ContactId> = (0..1000).map(|_| UuidGenerator.generate()).collect();
        assert_eq!(ids.len(), 1000);
    }
}
