//! Form state and its reducer.
//!
//! `FormState` holds everything the form knows: input values, current
//! validation errors, which fields have been touched, and where the form is in
//! its lifecycle. Transitions go through [`FormState::reduce`], which is pure.

use crate::config::Config;
use crate::domain::ValidationError;
use crate::models::{Field, FormValues};
use crate::validation::{self, FieldErrors, Rules};
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::debug;

/// Lifecycle position of a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormStatus {
    /// Fresh or just reset: empty values, no errors.
    #[default]
    Pristine,
    /// The user has interacted with at least one field.
    Editing,
    /// The last submit attempt failed validation.
    Invalid,
    /// Validation passed; the submission handler may run.
    Submitting,
}

/// Events the form reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    Change { field: Field, value: String },
    Blur(Field),
    Submit,
    Reset,
}

impl FormAction {
    pub fn change(field: Field, value: impl Into<String>) -> Self {
        FormAction::Change {
            field,
            value: value.into(),
        }
    }
}

/// Complete state of one form instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormState {
    pub values: FormValues,
    pub errors: FieldErrors,
    pub touched: BTreeSet<Field>,
    pub status: FormStatus,
    /// Submit attempts since the last reset, including rejected ones.
    pub submit_count: u32,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply `action` and return the resulting state.
    pub fn reduce(mut self, action: FormAction, config: &Config) -> Self {
        let rules = Rules::from(config);

        match action {
            FormAction::Change { field, value } => {
                self.values.set(field, value);
                self.status = FormStatus::Editing;
                if config.validate_on_change {
                    self.errors = validation::validate(&self.values, &rules);
                } else if validation::validate_field(field, &self.values, &rules).is_none() {
                    // A fixed field never keeps a stale message
                    self.errors.remove(field);
                }
            }
            FormAction::Blur(field) => {
                self.touched.insert(field);
                if self.status != FormStatus::Invalid {
                    self.status = FormStatus::Editing;
                }
                if config.validate_on_blur {
                    self.errors = validation::validate(&self.values, &rules);
                }
            }
            FormAction::Submit => {
                self.touched.extend(Field::ALL);
                self.submit_count = self.submit_count.saturating_add(1);
                self.errors = validation::validate(&self.values, &rules);
                self.status = if self.errors.is_empty() {
                    FormStatus::Submitting
                } else {
                    FormStatus::Invalid
                };
            }
            FormAction::Reset => {
                self = FormState::default();
            }
        }

        debug!(status = ?self.status, "contact form transition");
        self
    }

    /// The error displayed for `field`: its current error, once the field has
    /// been touched.
    pub fn visible_error(&self, field: Field) -> Option<&ValidationError> {
        if self.touched.contains(&field) {
            self.errors.get(field)
        } else {
            None
        }
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }
}
