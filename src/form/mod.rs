//! Contact form state machine and submission handling.

pub mod contact_form;
pub mod state;

pub use contact_form::{build_contact, ContactForm, CreateContact, SubmitOutcome};
pub use state::{FormAction, FormState, FormStatus};
