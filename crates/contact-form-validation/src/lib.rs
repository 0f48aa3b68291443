//! Contact Form Validation
//!
//! Pure, synchronous validators for the contact form. Nothing in this crate
//! holds state or performs I/O; the stateful component lives in `contact-form`.

pub mod errors;
pub mod field;
pub mod form;
pub mod rules;
pub mod validators;

pub use errors::{FormErrors, ValidationError};
pub use field::{Field, ParseFieldError};
pub use form::{validate_form, validate_form_with, FormData};
pub use rules::ValidationRules;
pub use validators::{is_valid_email, is_valid_name, validate_field, validate_field_with};
