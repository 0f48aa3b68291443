// File: src/validators.rs
// Purpose: Field-level validation rules

use crate::errors::ValidationError;
use crate::field::Field;
use crate::rules::ValidationRules;
use once_cell::sync::Lazy;
use regex::Regex;

// local@domain.tld with a TLD of at least two letters
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

// Letters, whitespace, hyphens and apostrophes
static NAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z\s'-]+$").unwrap());

/// Validate email format
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Check that a name only uses allowed characters
pub fn is_valid_name(name: &str) -> bool {
    NAME_REGEX.is_match(name)
}

/// Validate one field against the default rules
pub fn validate_field(field: Field, value: &str) -> Result<(), ValidationError> {
    validate_field_with(&ValidationRules::default(), field, value)
}

/// Validate one field against the given rules
///
/// Pure function of its inputs; the first failing check wins.
pub fn validate_field_with(
    rules: &ValidationRules,
    field: Field,
    value: &str,
) -> Result<(), ValidationError> {
    match field {
        Field::Name => validate_name(rules, value),
        Field::Email => validate_email(value),
        Field::Message => validate_message(rules, value),
    }
}

fn validate_name(rules: &ValidationRules, value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required(Field::Name));
    }
    if trimmed.chars().count() < rules.name_min_length {
        return Err(ValidationError::TooShort {
            field: Field::Name,
            min: rules.name_min_length,
        });
    }
    if !is_valid_name(trimmed) {
        return Err(ValidationError::InvalidCharacters(Field::Name));
    }
    Ok(())
}

fn validate_email(value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required(Field::Email));
    }
    if !is_valid_email(trimmed) {
        return Err(ValidationError::InvalidFormat(Field::Email));
    }
    Ok(())
}

fn validate_message(rules: &ValidationRules, value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required(Field::Message));
    }
    if trimmed.chars().count() < rules.message_min_length {
        return Err(ValidationError::TooShort {
            field: Field::Message,
            min: rules.message_min_length,
        });
    }
    // Upper bound counts the raw value, surrounding whitespace included
    if value.chars().count() > rules.message_max_length {
        return Err(ValidationError::TooLong {
            field: Field::Message,
            max: rules.message_max_length,
        });
    }
    Ok(())
}
