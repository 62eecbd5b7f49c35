//! Data models for the contact form.
//!
//! `FormValues` is the transient state bound to the inputs; `Contact` is the
//! record a successful submission hands off.

pub mod contact;
pub mod form_values;

pub use contact::Contact;
pub use form_values::{Field, FormValues};
