// File: src/state.rs
// Purpose: Synchronous form state and lifecycle transitions

use crate::error::FormError;
use contact_form_validation::{
    validate_field_with, validate_form_with, Field, FormData, FormErrors, ValidationRules,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

/// Lifecycle phase of the form
///
/// Exactly one phase is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Editing,
    Submitting,
    Submitted,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::Editing => "editing",
            Phase::Submitting => "submitting",
            Phase::Submitted => "submitted",
        })
    }
}

/// Result of a submit attempt that got past the phase guard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed and the form is now submitting
    Accepted,
    /// Validation failed; the form stays in editing with these errors
    Rejected(FormErrors),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted)
    }
}

/// Identifies one submission so late timer callbacks can be ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Point-in-time copy of everything a view needs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    pub data: FormData,
    pub errors: FormErrors,
    pub phase: Phase,
    pub submission_error: Option<String>,
}

impl FormSnapshot {
    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == Phase::Submitted
    }
}

/// Values, errors and phase of one contact form
#[derive(Debug, Clone, Default)]
pub struct FormState {
    rules: ValidationRules,
    data: FormData,
    errors: FormErrors,
    phase: Phase,
    submission_error: Option<String>,
    ticket: u64,
}

impl FormState {
    pub fn new(rules: ValidationRules) -> Self {
        Self {
            rules,
            ..Self::default()
        }
    }

    pub fn data(&self) -> &FormData {
        &self.data
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == Phase::Submitted
    }

    /// Message from the last failed submission, if any
    pub fn submission_error(&self) -> Option<&str> {
        self.submission_error.as_deref()
    }

    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            data: self.data.clone(),
            errors: self.errors.clone(),
            phase: self.phase,
            submission_error: self.submission_error.clone(),
        }
    }

    /// Update a field value and clear that field's error
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> Result<(), FormError> {
        self.ensure_editable()?;
        self.data.set(field, value);
        if self.errors.clear(field).is_some() {
            debug!(field = %field, "Cleared field error on edit");
        }
        self.submission_error = None;
        Ok(())
    }

    /// Re-validate one field, updating only its error entry
    ///
    /// Only allowed while editing, like edits themselves.
    pub fn validate_field(&mut self, field: Field) -> Result<bool, FormError> {
        self.ensure_editable()?;
        let result = validate_field_with(&self.rules, field, self.data.get(field));
        let valid = result.is_ok();
        self.errors.set(field, result);
        Ok(valid)
    }

    /// Validate every field and replace the error state with the result
    pub fn validate_form(&mut self) -> Result<bool, FormError> {
        self.ensure_editable()?;
        Ok(self.refresh_errors())
    }

    fn refresh_errors(&mut self) -> bool {
        self.errors = validate_form_with(&self.rules, &self.data);
        self.errors.is_empty()
    }

    /// Editing -> Submitting, guarded by form validation
    pub fn begin_submit(&mut self) -> Result<(SubmitOutcome, Option<Ticket>), FormError> {
        match self.phase {
            Phase::Submitting => return Err(FormError::SubmitInProgress),
            Phase::Submitted => return Err(FormError::AlreadySubmitted),
            Phase::Editing => {}
        }

        self.submission_error = None;
        if !self.refresh_errors() {
            info!(failed = self.errors.len(), "Submission blocked by validation errors");
            return Ok((SubmitOutcome::Rejected(self.errors.clone()), None));
        }

        self.ticket += 1;
        self.phase = Phase::Submitting;
        info!("Form submitting");
        Ok((SubmitOutcome::Accepted, Some(Ticket(self.ticket))))
    }

    /// Submitting -> Submitted; ignored for a stale ticket
    pub fn complete_submit(&mut self, ticket: Ticket) -> bool {
        if !self.holds(ticket, Phase::Submitting) {
            return false;
        }
        self.phase = Phase::Submitted;
        info!("Form submitted");
        true
    }

    /// Submitting -> Editing, keeping the values and recording why
    pub fn fail_submit(&mut self, ticket: Ticket, message: impl Into<String>) -> bool {
        if !self.holds(ticket, Phase::Submitting) {
            return false;
        }
        let message = message.into();
        info!(error = %message, "Form submission failed");
        self.submission_error = Some(message);
        self.phase = Phase::Editing;
        true
    }

    /// Submitted -> Editing after the success view timed out
    pub fn auto_reset(&mut self, ticket: Ticket) -> bool {
        if !self.holds(ticket, Phase::Submitted) {
            return false;
        }
        self.reset();
        true
    }

    /// Clear values and errors and return to editing
    pub fn reset(&mut self) {
        self.data = FormData::default();
        self.errors = FormErrors::default();
        self.submission_error = None;
        self.phase = Phase::Editing;
        debug!("Form reset");
    }

    fn holds(&self, ticket: Ticket, phase: Phase) -> bool {
        let current = ticket.0 == self.ticket && self.phase == phase;
        if !current {
            debug!(ticket = ticket.0, phase = %self.phase, "Ignoring stale lifecycle callback");
        }
        current
    }

    fn ensure_editable(&self) -> Result<(), FormError> {
        match self.phase {
            Phase::Editing => Ok(()),
            phase => Err(FormError::NotEditable(phase)),
        }
    }
}
