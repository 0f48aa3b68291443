// File: src/errors.rs
// Purpose: Field validation failures and the per-form error mapping

use crate::field::Field;
use std::collections::BTreeMap;

/// A single field validation failure
///
/// `Display` yields the message shown next to the input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{} is required", .0.label())]
    Required(Field),

    #[error("{} must be at least {min} characters", .field.label())]
    TooShort { field: Field, min: usize },

    #[error("{} must be less than {max} characters", .field.label())]
    TooLong { field: Field, max: usize },

    #[error("{} can only contain letters, spaces, hyphens, and apostrophes", .0.label())]
    InvalidCharacters(Field),

    #[error("Please enter a valid {0} address")]
    InvalidFormat(Field),
}

impl ValidationError {
    /// The field that failed
    pub fn field(&self) -> Field {
        match self {
            ValidationError::Required(field)
            | ValidationError::InvalidCharacters(field)
            | ValidationError::InvalidFormat(field) => *field,
            ValidationError::TooShort { field, .. } | ValidationError::TooLong { field, .. } => {
                *field
            }
        }
    }
}

/// Errors for the fields that failed their most recent validation
///
/// A missing key means the field is currently valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    errors: BTreeMap<Field, ValidationError>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error, keyed by the field it belongs to
    pub fn insert(&mut self, error: ValidationError) {
        self.errors.insert(error.field(), error);
    }

    /// Set or clear the entry for one field
    pub fn set(&mut self, field: Field, result: Result<(), ValidationError>) {
        match result {
            Ok(()) => {
                self.errors.remove(&field);
            }
            Err(error) => {
                self.errors.insert(field, error);
            }
        }
    }

    /// Remove the entry for one field, leaving the others untouched
    pub fn clear(&mut self, field: Field) -> Option<ValidationError> {
        self.errors.remove(&field)
    }

    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    /// Get the display message for a field
    pub fn message(&self, field: Field) -> Option<String> {
        self.errors.get(&field).map(|e| e.to_string())
    }

    pub fn has_error(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &ValidationError)> {
        self.errors.iter().map(|(field, error)| (*field, error))
    }

    /// Field names to messages, for templates
    pub fn to_messages(&self) -> BTreeMap<String, String> {
        self.errors
            .iter()
            .map(|(field, error)| (field.as_str().to_string(), error.to_string()))
            .collect()
    }
}

impl FromIterator<ValidationError> for FormErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        let mut errors = FormErrors::new();
        for error in iter {
            errors.insert(error);
        }
        errors
    }
}
