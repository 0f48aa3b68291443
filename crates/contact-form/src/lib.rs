// Contact Form
// Client-side contact form: field validation, simulated submission, success view

pub mod component;
pub mod config;
pub mod error;
pub mod render;
pub mod state;
pub mod submitter;

pub use component::ContactForm;
pub use config::{Config, TimingConfig};
pub use error::{FormError, SubmitError};
pub use state::{FormSnapshot, FormState, Phase, SubmitOutcome};
pub use submitter::{SimulatedSubmitter, Submitter};

// Re-export validation types
pub use contact_form_validation::{
    validate_field, validate_form, Field, FormData, FormErrors, ValidationError, ValidationRules,
};

// Re-export Maud for hosts embedding the markup
pub use maud::Markup;
