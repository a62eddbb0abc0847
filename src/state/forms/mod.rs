//! Form domain layer
//!
//! Type-safe state for the contact form: field values, validation and the
//! submission lifecycle.

mod contact_form;
mod field;
mod validation;

pub use contact_form::{ContactForm, ContactPayload, SubmissionStatus, SubmitRejected};
pub use field::FieldName;
