//! The contact form component.
//!
//! [`ContactForm`] owns a [`FormState`] and wires it to the two outside
//! capabilities it needs: an ID generator and the caller's creation callback.

use super::state::{FormAction, FormState, FormStatus};
use crate::config::Config;
use crate::domain::{ContactId, IdGenerator, PhoneNumber, UuidGenerator};
use crate::models::{Contact, Field, FormValues};
use crate::presentation::{self, ClassNames, FormView};
use crate::validation::FieldErrors;
use tracing::{debug, info, warn};

/// Receiver of newly created contacts.
///
/// Called exactly once per successful submission. The form ignores whatever
/// happens inside; failures are the implementor's to handle.
pub trait CreateContact {
    fn create_contact(&mut self, contact: Contact);
}

impl<F> CreateContact for F
where
    F: FnMut(Contact),
{
    fn create_contact(&mut self, contact: Contact) {
        self(contact)
    }
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The contact was handed to the callback and the form was reset.
    Submitted(ContactId),
    /// Validation failed; the form keeps its values and shows these errors.
    Rejected(FieldErrors),
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted(_))
    }
}

/// A contact entry form bound to a creation callback.
///
/// # Example
///
/// ```
/// use contact_form::{Contact, ContactForm, Field};
///
/// let mut created = Vec::new();
/// let mut form = ContactForm::new(|contact: Contact| created.push(contact));
/// form.change(Field::Name, "John Smith");
/// form.change(Field::Number, "0671234567");
/// assert!(form.submit().is_submitted());
/// drop(form);
///
/// assert_eq!(created[0].number, "+380671234567");
/// ```
pub struct ContactForm<C, G = UuidGenerator> {
    state: FormState,
    config: Config,
    create_contact: C,
    ids: G,
}

impl<C: CreateContact> ContactForm<C, UuidGenerator> {
    /// Create a form with default configuration and random UUID identifiers.
    pub fn new(create_contact: C) -> Self {
        Self::with_config(Config::default(), create_contact)
    }

    /// Create a form with the given configuration.
    pub fn with_config(config: Config, create_contact: C) -> Self {
        Self::with_id_generator(config, create_contact, UuidGenerator)
    }
}

impl<C: CreateContact, G: IdGenerator> ContactForm<C, G> {
    /// Create a form with a custom identifier source.
    pub fn with_id_generator(config: Config, create_contact: C, ids: G) -> Self {
        Self {
            state: FormState::new(),
            config,
            create_contact,
            ids,
        }
    }

    /// Apply an action through the reducer.
    pub fn dispatch(&mut self, action: FormAction) {
        let state = std::mem::take(&mut self.state);
        self.state = state.reduce(action, &self.config);
    }

    /// Update a field's value.
    pub fn change(&mut self, field: Field, value: impl Into<String>) {
        self.dispatch(FormAction::change(field, value));
    }

    /// Mark a field as having lost focus.
    pub fn blur(&mut self, field: Field) {
        self.dispatch(FormAction::Blur(field));
    }

    /// Clear values, errors and touched fields.
    pub fn reset(&mut self) {
        self.dispatch(FormAction::Reset);
    }

    /// Validate every field and, if all pass, create the contact.
    ///
    /// On success the callback runs once with the new contact and the form
    /// returns to its initial state. On failure nothing is created and the
    /// entered values stay in place.
    pub fn submit(&mut self) -> SubmitOutcome {
        self.dispatch(FormAction::Submit);

        if self.state.status != FormStatus::Submitting {
            debug!(
                invalid_fields = self.state.errors.len(),
                "contact form submission rejected"
            );
            return SubmitOutcome::Rejected(self.state.errors.clone());
        }

        let contact = build_contact(&self.state.values, &self.ids);
        let id = contact.id.clone();

        self.create_contact.create_contact(contact);
        info!(contact_id = %id, "contact submitted");

        self.reset();
        SubmitOutcome::Submitted(id)
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn values(&self) -> &FormValues {
        &self.state.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.state.errors
    }

    pub fn status(&self) -> FormStatus {
        self.state.status
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Presentation model for the current state, using default class names.
    pub fn view(&self) -> FormView {
        self.view_with(&ClassNames::default())
    }

    /// Presentation model for the current state.
    pub fn view_with(&self, classes: &ClassNames) -> FormView {
        presentation::render(&self.state, classes)
    }
}

/// Build the contact record for already-validated values.
///
/// The number is normalized to E.164. If it unexpectedly fails to parse, the
/// raw input is used instead and the submission goes ahead.
pub fn build_contact(values: &FormValues, ids: &impl IdGenerator) -> Contact {
    let number = match PhoneNumber::parse(&values.number) {
        Ok(phone) => phone.to_e164(),
        Err(err) => {
            warn!(error = %err, "phone number did not parse at submission, keeping raw input");
            values.number.clone()
        }
    };

    Contact::new(ids.generate(), values.name.clone(), number)
}
