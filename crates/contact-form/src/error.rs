// File: src/error.rs
// Purpose: Errors returned by the contact form component

use crate::state::Phase;
use contact_form_validation::ParseFieldError;

/// Misuse of the component, as opposed to a field validation failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("a submission is already in progress")]
    SubmitInProgress,

    #[error("the form has already been submitted")]
    AlreadySubmitted,

    #[error("the form cannot be edited while {0}")]
    NotEditable(Phase),

    #[error(transparent)]
    UnknownField(#[from] ParseFieldError),
}

/// Failure reported by a [`crate::Submitter`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("network error: {0}")]
    Network(String),

    #[error("submission rejected: {0}")]
    Rejected(String),
}
