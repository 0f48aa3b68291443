//! Field and form validation behavior as seen by callers of the crate

use contact_form_validation::{
    validate_field, validate_form, Field, FormData, ValidationError,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case("")]
#[case(" ")]
#[case("\t\n  ")]
fn test_blank_name_is_required(#[case] name: &str) {
    assert_eq!(
        validate_field(Field::Name, name),
        Err(ValidationError::Required(Field::Name))
    );
}

#[rstest]
#[case("Jo3")]
#[case("Ann!")]
#[case("Mary_Jane")]
#[case("Bob@home")]
#[case("Zoë")]
fn test_name_rejects_characters_outside_allowed_set(#[case] name: &str) {
    assert_eq!(
        validate_field(Field::Name, name),
        Err(ValidationError::InvalidCharacters(Field::Name))
    );
}

#[rstest]
#[case("Jo")]
#[case("Mary-Jane O'Neil")]
#[case("  Anne Marie  ")]
fn test_name_accepts_letters_spaces_hyphens_apostrophes(#[case] name: &str) {
    assert_eq!(validate_field(Field::Name, name), Ok(()));
}

#[test]
fn test_single_letter_name_is_too_short() {
    assert_eq!(
        validate_field(Field::Name, " J "),
        Err(ValidationError::TooShort { field: Field::Name, min: 2 })
    );
}

#[rstest]
#[case("jo")]
#[case("jo@example")]
#[case("jo@example.c")]
#[case("jo@@example.com")]
#[case("jo#x@example.com")]
fn test_malformed_email(#[case] email: &str) {
    assert_eq!(
        validate_field(Field::Email, email),
        Err(ValidationError::InvalidFormat(Field::Email))
    );
}

#[test]
fn test_blank_email_is_required() {
    assert_eq!(
        validate_field(Field::Email, "   "),
        Err(ValidationError::Required(Field::Email))
    );
}

#[test]
fn test_well_formed_email() {
    assert_eq!(validate_field(Field::Email, "jo@example.com"), Ok(()));
    assert_eq!(validate_field(Field::Email, "a.b%c+d-e@x-y.z.io"), Ok(()));
}

#[rstest]
#[case(10)]
#[case(500)]
#[case(1000)]
fn test_message_lengths_in_range(#[case] len: usize) {
    let message = "a".repeat(len);
    assert_eq!(validate_field(Field::Message, &message), Ok(()));
}

#[test]
fn test_message_length_nine_is_too_short() {
    assert_eq!(
        validate_field(Field::Message, &"a".repeat(9)),
        Err(ValidationError::TooShort { field: Field::Message, min: 10 })
    );
}

#[test]
fn test_message_length_1001_is_too_long() {
    assert_eq!(
        validate_field(Field::Message, &"a".repeat(1001)),
        Err(ValidationError::TooLong { field: Field::Message, max: 1000 })
    );
}

#[test]
fn test_message_upper_bound_counts_surrounding_whitespace() {
    let message = format!("{} ", "a".repeat(1000));
    assert_eq!(
        validate_field(Field::Message, &message),
        Err(ValidationError::TooLong { field: Field::Message, max: 1000 })
    );
}

#[test]
fn test_padded_message_within_raw_limit() {
    let message = format!(" {} ", "a".repeat(998));
    assert_eq!(message.chars().count(), 1000);
    assert_eq!(validate_field(Field::Message, &message), Ok(()));
}

#[test]
fn test_message_counts_characters_not_bytes() {
    let message = "é".repeat(1000);
    assert_eq!(validate_field(Field::Message, &message), Ok(()));
}

#[test]
fn test_padded_short_message_is_too_short() {
    let message = format!("   {}   ", "a".repeat(9));
    assert!(matches!(
        validate_field(Field::Message, &message),
        Err(ValidationError::TooShort { .. })
    ));
}

#[test]
fn test_form_valid_iff_every_field_valid() {
    let valid = FormData::new("Jo", "jo@example.com", "This is a valid message.");
    assert!(validate_form(&valid).is_empty());

    for field in Field::ALL {
        let mut data = valid.clone();
        data.set(field, "");
        let errors = validate_form(&data);
        assert_eq!(errors.len(), 1);
        assert!(errors.has_error(field));
    }
}

#[test]
fn test_short_message_only_flags_message() {
    let data = FormData::new("Jo", "jo@example.com", "short");
    let errors = validate_form(&data);
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors.message(Field::Message).as_deref(),
        Some("Message must be at least 10 characters")
    );
}
