//! Submission transport
//!
//! The component hands validated form data to a [`Submitter`]. The default
//! [`SimulatedSubmitter`] performs no I/O: it waits out a fixed delay standing
//! in for network latency and always succeeds.

use crate::error::SubmitError;
use async_trait::async_trait;
use contact_form_validation::FormData;
use std::time::Duration;
use tracing::debug;

/// Delivers a validated form somewhere
#[async_trait]
pub trait Submitter: Send + Sync {
    async fn submit(&self, data: &FormData) -> Result<(), SubmitError>;
}

/// Waits for `delay`, then reports success
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(Duration::from_millis(1500))
    }
}

#[async_trait]
impl Submitter for SimulatedSubmitter {
    async fn submit(&self, data: &FormData) -> Result<(), SubmitError> {
        debug!(message_chars = data.message.chars().count(), delay = ?self.delay, "Simulating submission");
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_simulated_submitter_waits_then_succeeds() {
        let submitter = SimulatedSubmitter::new(Duration::from_millis(1500));
        let start = tokio::time::Instant::now();
        let result = submitter.submit(&FormData::default()).await;
        assert_eq!(result, Ok(()));
        assert!(start.elapsed() >= Duration::from_millis(1500));
    }
}
