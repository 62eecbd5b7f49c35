//! Domain value objects and types.
//!
//! Type-safe wrappers for the concepts the contact form deals in: contact
//! identifiers and phone numbers. Value objects validate at construction
//! time so that invalid data never reaches a `Contact` record.

pub mod contact_id;
pub mod errors;
pub mod phone;

pub use contact_id::{ContactId, IdGenerator, UuidGenerator};
pub use errors::ValidationError;
pub use phone::{PhoneNumber, DEFAULT_REGION};
