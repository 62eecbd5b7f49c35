//! Contact record produced by a successful form submission.

use crate::domain::ContactId;
use serde::{Deserialize, Serialize};

/// A contact handed to the creation callback.
///
/// `number` is in E.164 form whenever the submitted input could be parsed,
/// and the raw input otherwise. `name` is exactly what the user entered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    /// Freshly generated identifier
    pub id: ContactId,

    /// Name as entered
    pub name: String,

    /// Phone number
    pub number: String,
}

impl Contact {
    /// Create a new contact record.
    pub fn new(id: ContactId, name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            number: number.into(),
        }
    }
}
