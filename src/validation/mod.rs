//! Field validation rules.
//!
//! Each field has a pure rule returning the first problem it finds, if any.
//! [`validate`] runs every rule and collects the results into a
//! [`FieldErrors`] map. Nothing here has side effects, so the rules are safe
//! to re-run on every keystroke.

use crate::config::{Config, DEFAULT_NAME_MAX_LEN, DEFAULT_NAME_MIN_LEN};
use crate::domain::{PhoneNumber, ValidationError};
use crate::models::{Field, FormValues};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;
use tracing::debug;

/// Length bounds applied to the name field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    pub name_min_len: usize,
    pub name_max_len: usize,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            name_min_len: DEFAULT_NAME_MIN_LEN,
            name_max_len: DEFAULT_NAME_MAX_LEN,
        }
    }
}

impl From<&Config> for Rules {
    fn from(config: &Config) -> Self {
        Self {
            name_min_len: config.name_min_len,
            name_max_len: config.name_max_len,
        }
    }
}

/// Validate the name field.
///
/// Length is measured in characters on the trimmed value.
pub fn validate_name(name: &str, rules: &Rules) -> Option<ValidationError> {
    let len = name.trim().chars().count();

    if len == 0 {
        Some(ValidationError::NameRequired)
    } else if len < rules.name_min_len {
        Some(ValidationError::NameTooShort {
            min: rules.name_min_len,
        })
    } else if len > rules.name_max_len {
        Some(ValidationError::NameTooLong {
            max: rules.name_max_len,
        })
    } else {
        None
    }
}

/// Validate the number field.
///
/// Malformed input and well-formed but unassignable numbers produce the same
/// error.
pub fn validate_number(number: &str) -> Option<ValidationError> {
    if number.trim().is_empty() {
        return Some(ValidationError::NumberRequired);
    }

    match PhoneNumber::parse(number) {
        Ok(phone) if phone.is_valid() => None,
        Ok(_) => Some(ValidationError::InvalidPhone(number.to_string())),
        Err(err) => Some(err),
    }
}

/// Validate a single field of `values`.
pub fn validate_field(field: Field, values: &FormValues, rules: &Rules) -> Option<ValidationError> {
    match field {
        Field::Name => validate_name(&values.name, rules),
        Field::Number => validate_number(&values.number),
    }
}

/// Run every rule and collect the failures.
pub fn validate(values: &FormValues, rules: &Rules) -> FieldErrors {
    let errors: FieldErrors = Field::ALL
        .into_iter()
        .filter_map(|field| validate_field(field, values, rules).map(|err| (field, err)))
        .collect();

    debug!(invalid_fields = errors.len(), "validated contact form");
    errors
}

/// Validation failures keyed by field.
///
/// A field without an entry is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, ValidationError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        self.0.get(&field)
    }

    /// The user-facing message for `field`, if it is invalid.
    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(ToString::to_string)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn insert(&mut self, field: Field, error: ValidationError) {
        self.0.insert(field, error);
    }

    pub fn remove(&mut self, field: Field) -> Option<ValidationError> {
        self.0.remove(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &ValidationError)> {
        self.0.iter().map(|(field, err)| (*field, err))
    }
}

impl FromIterator<(Field, ValidationError)> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = (Field, ValidationError)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

// Serialized as {"name": "<message>", ...}
impl Serialize for FieldErrors {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (field, err) in &self.0 {
            map.serialize_entry(field.key(), &err.to_string())?;
        }
        map.end()
    }
}
