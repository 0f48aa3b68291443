// File: src/form.rs
// Purpose: Form values and whole-form validation

use crate::errors::FormErrors;
use crate::field::Field;
use crate::rules::ValidationRules;
use crate::validators::validate_field_with;
use serde::{Deserialize, Serialize};

/// The values entered into the contact form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormData {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

impl FormData {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    /// True when every field is empty
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

/// Validate every field against the default rules
pub fn validate_form(data: &FormData) -> FormErrors {
    validate_form_with(&ValidationRules::default(), data)
}

/// Validate every field, collecting the failures
///
/// The form is submittable when the result is empty.
pub fn validate_form_with(rules: &ValidationRules, data: &FormData) -> FormErrors {
    Field::ALL
        .iter()
        .filter_map(|field| validate_field_with(rules, *field, data.get(*field)).err())
        .collect()
}
