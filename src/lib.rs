//! Contact Form - validation, phone normalization and submission for a
//! contact entry form.
//!
//! The form collects a name and a phone number, validates both, normalizes
//! the number to E.164 (reading numbers without a country prefix as
//! Ukrainian), and hands a [`Contact`] with a fresh identifier to a
//! caller-supplied callback before resetting itself.
//!
//! # Architecture
//!
//! - **domain**: Value objects (contact IDs, phone numbers) and validation errors
//! - **models**: Form values and the contact record
//! - **validation**: Pure per-field rules
//! - **form**: Reducer-driven form state and the submission handler
//! - **presentation**: View model and HTML rendering
//! - **config**: Configuration from environment variables
//! - **error**: Crate-level error types
//! - **logging**: Optional tracing subscriber setup

pub mod config;
pub mod domain;
pub mod error;
pub mod form;
pub mod logging;
pub mod models;
pub mod presentation;
pub mod validation;

pub use config::Config;
pub use domain::{ContactId, IdGenerator, PhoneNumber, UuidGenerator, ValidationError};
pub use error::{ConfigError, ConfigResult};
pub use form::{ContactForm, CreateContact, FormAction, FormState, FormStatus, SubmitOutcome};
pub use models::{Contact, Field, FormValues};
pub use presentation::{ClassNames, FormView};
pub use validation::{validate, FieldErrors, Rules};
