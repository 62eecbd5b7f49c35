//! PhoneNumber value object.

use super::errors::ValidationError;
use phonenumber::country::Id;
use phonenumber::Mode;
use std::fmt;

/// Region assumed for numbers written without an international prefix.
///
/// Numbers such as `067 123 45 67` are read as Ukrainian. This applies both
/// when validating input and when formatting the submitted number.
pub const DEFAULT_REGION: Id = Id::UA;

/// A parsed phone number.
///
/// Parsing succeeds for anything the numbering-plan parser can make sense
/// of; it does not imply the number is assignable. Use [`PhoneNumber::is_valid`]
/// for that.
///
/// # Example
///
/// ```
/// use contact_form::domain::PhoneNumber;
///
/// let phone = PhoneNumber::parse("067 123 45 67").unwrap();
/// assert!(phone.is_valid());
/// assert_eq!(phone.to_e164(), "+380671234567");
/// ```
#[derive(Debug, Clone)]
pub struct PhoneNumber {
    raw: String,
    parsed: phonenumber::PhoneNumber,
}

impl PhoneNumber {
    /// Parse a phone number under [`DEFAULT_REGION`].
    ///
    /// Leading and trailing whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` carrying the raw input if the
    /// parser rejects it.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        let parsed = phonenumber::parse(Some(DEFAULT_REGION), trimmed)
            .map_err(|_| ValidationError::InvalidPhone(raw.to_string()))?;

        Ok(Self {
            raw: raw.to_string(),
            parsed,
        })
    }

    /// Whether the number is valid (assignable) in the region it resolves to.
    pub fn is_valid(&self) -> bool {
        phonenumber::is_valid(&self.parsed)
    }

    /// Render the number in E.164 form, e.g. `+380671234567`.
    pub fn to_e164(&self) -> String {
        self.parsed.format().mode(Mode::E164).to_string()
    }

    /// The input this number was parsed from, untrimmed.
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_e164())
    }
}
