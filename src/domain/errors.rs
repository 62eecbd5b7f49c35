//! Domain validation errors.

use std::fmt;

/// Errors that can occur while validating form input or building
/// domain value objects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided ID is empty.
    EmptyId,

    /// The name field is empty (after trimming).
    NameRequired,

    /// The name is shorter than the configured minimum.
    NameTooShort { min: usize },

    /// The name is longer than the configured maximum.
    NameTooLong { max: usize },

    /// The number field is empty (after trimming).
    NumberRequired,

    /// The provided phone number could not be parsed, or parsed but is not
    /// assignable in its region.
    InvalidPhone(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "ID cannot be empty"),
            Self::NameRequired => write!(f, "Please enter a name"),
            Self::NameTooShort { min } => {
                write!(f, "Name must be at least {} characters long", min)
            }
            Self::NameTooLong { max } => write!(f, "Name cannot exceed {} characters", max),
            Self::NumberRequired => write!(f, "Please enter a phone number"),
            Self::InvalidPhone(_) => write!(f, "Please enter a valid phone number"),
        }
    }
}

impl std::error::Error for ValidationError {}
