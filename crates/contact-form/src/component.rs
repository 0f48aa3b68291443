// File: src/component.rs
// Purpose: Contact form component driving the submission lifecycle on tokio timers

use crate::config::Config;
use crate::error::FormError;
use crate::render;
use crate::state::{FormSnapshot, FormState, Phase, SubmitOutcome, Ticket};
use crate::submitter::{SimulatedSubmitter, Submitter};
use contact_form_validation::{Field, FormData, ValidationRules};
use maud::Markup;
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::sync::{watch, RwLock};
use tracing::{debug, warn};

/// Shared between the component handle and its pending timers
struct Inner {
    state: RwLock<FormState>,
    phase_tx: watch::Sender<Phase>,
}

impl Inner {
    fn publish(&self, phase: Phase) {
        self.phase_tx.send_if_modified(|current| {
            if *current == phase {
                false
            } else {
                *current = phase;
                true
            }
        });
    }
}

/// A contact form instance
///
/// Edits and validation happen synchronously under a short write lock.
/// `submit` starts a background task that runs the submitter, marks the form
/// submitted and, after the reset delay, clears it. That task only holds a
/// weak reference: dropping the component discards whatever is pending.
pub struct ContactForm {
    inner: Arc<Inner>,
    submitter: Arc<dyn Submitter>,
    reset_delay: Duration,
}

impl ContactForm {
    /// Create a form with a simulated submitter configured from `config`
    pub fn new(config: &Config) -> Self {
        let submitter = SimulatedSubmitter::new(config.timing.submit_delay());
        Self::with_submitter(config.rules, config.timing.reset_delay(), Arc::new(submitter))
    }

    pub fn with_submitter(
        rules: ValidationRules,
        reset_delay: Duration,
        submitter: Arc<dyn Submitter>,
    ) -> Self {
        let (phase_tx, _) = watch::channel(Phase::Editing);
        Self {
            inner: Arc::new(Inner {
                state: RwLock::new(FormState::new(rules)),
                phase_tx,
            }),
            submitter,
            reset_delay,
        }
    }

    /// Watch lifecycle transitions
    pub fn subscribe(&self) -> watch::Receiver<Phase> {
        self.inner.phase_tx.subscribe()
    }

    pub async fn phase(&self) -> Phase {
        self.inner.state.read().await.phase()
    }

    pub async fn snapshot(&self) -> FormSnapshot {
        self.inner.state.read().await.snapshot()
    }

    /// Render the current state
    pub async fn render(&self) -> Markup {
        render::contact_form(&self.snapshot().await)
    }

    /// Change handler: update the value and clear that field's error
    pub async fn set_field(&self, field: Field, value: impl Into<String>) -> Result<(), FormError> {
        self.inner.state.write().await.set_field(field, value)
    }

    /// Change handler keyed by the input's `name` attribute
    pub async fn set_field_by_name(&self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        let field: Field = name.parse()?;
        self.set_field(field, value).await
    }

    /// Re-validate a single field, e.g. when it loses focus
    pub async fn validate_field(&self, field: Field) -> Result<bool, FormError> {
        self.inner.state.write().await.validate_field(field)
    }

    /// Validate every field, replacing the error state
    pub async fn validate(&self) -> Result<bool, FormError> {
        self.inner.state.write().await.validate_form()
    }

    /// Clear the form and return to editing
    pub async fn reset(&self) {
        let mut state = self.inner.state.write().await;
        state.reset();
        self.inner.publish(state.phase());
    }

    /// Submit action
    ///
    /// Returns as soon as the form is validated. An accepted submission
    /// continues in the background; observe it through [`Self::subscribe`].
    pub async fn submit(&self) -> Result<SubmitOutcome, FormError> {
        let (outcome, ticket, data) = {
            let mut state = self.inner.state.write().await;
            let (outcome, ticket) = state.begin_submit()?;
            self.inner.publish(state.phase());
            (outcome, ticket, state.data().clone())
        };

        if let Some(ticket) = ticket {
            tokio::spawn(run_submission(
                Arc::downgrade(&self.inner),
                self.submitter.clone(),
                data,
                ticket,
                self.reset_delay,
            ));
        }

        Ok(outcome)
    }
}

async fn run_submission(
    inner: Weak<Inner>,
    submitter: Arc<dyn Submitter>,
    data: FormData,
    ticket: Ticket,
    reset_delay: Duration,
) {
    let result = submitter.submit(&data).await;

    let Some(strong) = inner.upgrade() else {
        debug!("Form dropped before submission completed");
        return;
    };

    {
        let mut state = strong.state.write().await;
        let submitted = match result {
            Ok(()) => state.complete_submit(ticket),
            Err(e) => {
                warn!(error = %e, "Submitter failed");
                state.fail_submit(ticket, e.to_string());
                false
            }
        };
        strong.publish(state.phase());
        if !submitted {
            return;
        }
    }
    drop(strong);

    tokio::time::sleep(reset_delay).await;

    let Some(strong) = inner.upgrade() else {
        debug!("Form dropped before auto-reset");
        return;
    };
    let mut state = strong.state.write().await;
    if state.auto_reset(ticket) {
        strong.publish(state.phase());
    }
}
