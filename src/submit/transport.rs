//! Pluggable submit collaborator for the contact form

use crate::state::ContactPayload;
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Why a submission did not go through
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("transport failed: {0}")]
    Transport(String),

    #[error("submission timed out")]
    Timeout,
}

/// Delivers a contact payload somewhere (HTTP endpoint, mail relay, ...).
///
/// Implementations must eventually resolve; the controller additionally
/// bounds every call with a timeout.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmitTransport: Send + Sync {
    async fn submit_payload(&self, payload: &ContactPayload) -> Result<(), SubmitError>;
}

/// Stand-in transport: waits a fixed latency and always succeeds
#[derive(Debug, Clone)]
pub struct SimulatedTransport {
    delay: Duration,
}

impl SimulatedTransport {
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

#[async_trait]
impl SubmitTransport for SimulatedTransport {
    async fn submit_payload(&self, payload: &ContactPayload) -> Result<(), SubmitError> {
        tokio::time::sleep(self.delay).await;

        let body = serde_json::to_string(payload)
            .map_err(|e| SubmitError::Transport(format!("failed to encode payload: {e}")))?;
        tracing::info!("Form submitted: {body}");
        Ok(())
    }
}
