//! Form fields and the values bound to them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two inputs of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Number,
}

impl Field {
    /// Every field, in display order.
    pub const ALL: [Field; 2] = [Field::Name, Field::Number];

    /// Key used for the input's `name` attribute and in error maps.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Number => "number",
        }
    }

    /// Static label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Number => "Number",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Current contents of the form inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues {
    pub name: String,
    pub number: String,
}

impl FormValues {
    pub fn new(name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            number: number.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Number => &self.number,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Number => &mut self.number,
        };
        *slot = value.into();
    }
}
