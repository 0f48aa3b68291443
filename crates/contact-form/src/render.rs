// File: src/render.rs
// Purpose: Maud markup for the contact form

use crate::state::FormSnapshot;
use contact_form_validation::Field;
use maud::{html, Markup};

/// Render the form, or the success view once submitted
pub fn contact_form(snapshot: &FormSnapshot) -> Markup {
    html! {
        div class="contact-form" data-phase=(snapshot.phase.to_string()) {
            @if snapshot.is_submitted() {
                div class="contact-form__success" role="status" {
                    h2 { "Message sent!" }
                    p { "Thank you for reaching out. We'll get back to you soon." }
                }
            } @else {
                form method="post" novalidate {
                    @if let Some(error) = &snapshot.submission_error {
                        div class="contact-form__alert" role="alert" { (error) }
                    }
                    @for field in Field::ALL {
                        (field_control(snapshot, field))
                    }
                    button type="submit" disabled[snapshot.is_submitting()] {
                        @if snapshot.is_submitting() {
                            "Sending..."
                        } @else {
                            "Send Message"
                        }
                    }
                }
            }
        }
    }
}

fn field_control(snapshot: &FormSnapshot, field: Field) -> Markup {
    let id = field.as_str();
    let value = snapshot.data.get(field);
    let error = snapshot.errors.message(field);
    let invalid = if error.is_some() { "true" } else { "false" };
    let described_by = error.as_ref().map(|_| format!("{}-error", id));

    html! {
        div class="contact-form__field" {
            label for=(id) { (field.label()) }
            @match field {
                Field::Message => {
                    textarea id=(id) name=(id) rows="5"
                        disabled[snapshot.is_submitting()]
                        aria-invalid=(invalid)
                        aria-describedby=[described_by.as_deref()] { (value) }
                }
                Field::Email => {
                    input type="email" id=(id) name=(id) value=(value)
                        disabled[snapshot.is_submitting()]
                        aria-invalid=(invalid)
                        aria-describedby=[described_by.as_deref()];
                }
                Field::Name => {
                    input type="text" id=(id) name=(id) value=(value)
                        disabled[snapshot.is_submitting()]
                        aria-invalid=(invalid)
                        aria-describedby=[described_by.as_deref()];
                }
            }
            @if let Some(message) = &error {
                p class="contact-form__error" id=(format!("{}-error", id)) { (message) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Phase;
    use contact_form_validation::{validate_form, FormData};

    #[test]
    fn test_editing_form_shows_values_and_errors() {
        let data = FormData::new("Jo", "jo@", "");
        let snapshot = FormSnapshot {
            errors: validate_form(&data),
            data,
            ..FormSnapshot::default()
        };
        let html = contact_form(&snapshot).into_string();

        assert!(html.contains(r#"data-phase="editing""#));
        assert!(html.contains(r#"value="Jo""#));
        assert!(html.contains("Please enter a valid email address"));
        assert!(html.contains("Message is required"));
        assert!(!html.contains("name-error"));
        assert!(html.contains(r#"id="email-error""#));
        assert!(html.contains("Send Message"));
        assert!(!html.contains("disabled"));
    }

    #[test]
    fn test_submitting_disables_inputs_and_button() {
        let snapshot = FormSnapshot {
            phase: Phase::Submitting,
            ..FormSnapshot::default()
        };
        let html = contact_form(&snapshot).into_string();
        assert!(html.contains("Sending..."));
        assert!(html.contains("disabled"));
    }

    #[test]
    fn test_submitted_shows_success_view() {
        let snapshot = FormSnapshot {
            phase: Phase::Submitted,
            ..FormSnapshot::default()
        };
        let html = contact_form(&snapshot).into_string();
        assert!(html.contains("Message sent!"));
        assert!(!html.contains("<form"));
    }

    #[test]
    fn test_values_are_escaped() {
        let snapshot = FormSnapshot {
            data: FormData::new("<b>", "", "a & b"),
            ..FormSnapshot::default()
        };
        let html = contact_form(&snapshot).into_string();
        assert!(html.contains("&lt;b&gt;"));
        assert!(html.contains("a &amp; b"));
    }

    #[test]
    fn test_submission_error_alert() {
        let snapshot = FormSnapshot {
            submission_error: Some("network error: offline".to_string()),
            ..FormSnapshot::default()
        };
        let html = contact_form(&snapshot).into_string();
        assert!(html.contains(r#"role="alert""#));
        assert!(html.contains("network error: offline"));
    }
}
