//! Drives the contact form through an asynchronous submission
//!
//! The controller wraps the synchronous [`ContactForm`] state machine with
//! the two waits a submission involves: the transport call and the
//! success-banner auto-revert. Both run as background tasks that report
//! back over a channel; the UI loop drains it with
//! [`ContactController::poll_events`].

use super::timer::OneShotTimer;
use super::transport::{SubmitError, SubmitTransport};
use crate::state::{ContactForm, FieldName, SubmissionStatus, SubmitRejected};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use uuid::Uuid;

/// Timing knobs for submissions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitTiming {
    /// How long the success banner stays before reverting to idle
    pub revert_after: Duration,
    /// Upper bound on a single transport call
    pub timeout: Duration,
}

impl Default for SubmitTiming {
    fn default() -> Self {
        Self {
            revert_after: Duration::from_secs(5),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Completion notices from background work
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    SubmitFinished {
        cycle: u64,
        result: Result<(), SubmitError>,
    },
    StatusReverted {
        cycle: u64,
    },
}

pub struct ContactController {
    form: ContactForm,
    transport: Arc<dyn SubmitTransport>,
    timing: SubmitTiming,
    events_tx: mpsc::UnboundedSender<FormEvent>,
    events_rx: mpsc::UnboundedReceiver<FormEvent>,
    submit_task: Option<JoinHandle<()>>,
    revert_timer: OneShotTimer,
}

impl ContactController {
    pub fn new(transport: Arc<dyn SubmitTransport>, timing: SubmitTiming) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            form: ContactForm::new(),
            transport,
            timing,
            events_tx,
            events_rx,
            submit_task: None,
            revert_timer: OneShotTimer::new(),
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    #[cfg(test)]
    pub fn status(&self) -> SubmissionStatus {
        self.form.status()
    }

    #[cfg(test)]
    pub fn update_field(&mut self, name: FieldName, value: impl Into<String>) {
        self.form.update_field(name, value);
    }

    pub fn push_char(&mut self, name: FieldName, c: char) {
        let value = self.form.field(name).with_char(c);
        self.form.update_field(name, value);
    }

    pub fn pop_char(&mut self, name: FieldName) {
        let value = self.form.field(name).without_last_char();
        self.form.update_field(name, value);
    }

    pub fn blur_field(&mut self, name: FieldName) {
        self.form.blur_field(name);
    }

    pub fn dismiss_error(&mut self) -> bool {
        self.form.dismiss_error()
    }

    /// Whether background work is outstanding
    pub fn is_busy(&self) -> bool {
        self.form.status() == SubmissionStatus::Submitting || self.revert_pending()
    }

    pub fn revert_pending(&self) -> bool {
        self.revert_timer.is_pending()
    }

    /// Validate and, if clean, start delivering the payload.
    ///
    /// Returns the cycle number of the new attempt. A call while a previous
    /// attempt is in flight is rejected without side effects. Starting a new
    /// attempt cancels any pending auto-revert from the previous one.
    pub fn submit(&mut self) -> Result<u64, SubmitRejected> {
        let started = self.form.begin_submit()?;

        if self.revert_timer.cancel() {
            tracing::debug!("New submission superseded pending status revert");
        }

        let cycle = started.cycle;
        let payload = started.payload;
        let transport = Arc::clone(&self.transport);
        let events_tx = self.events_tx.clone();
        let timeout = self.timing.timeout;
        let submission_id = Uuid::new_v4();

        tracing::info!("Submitting contact form (cycle {cycle}, id {submission_id})");

        self.submit_task = Some(tokio::spawn(async move {
            let result = match tokio::time::timeout(timeout, transport.submit_payload(&payload))
                .await
            {
                Ok(result) => result,
                Err(_) => Err(SubmitError::Timeout),
            };
            let _ = events_tx.send(FormEvent::SubmitFinished { cycle, result });
        }));

        Ok(cycle)
    }

    /// Apply one completion notice. Returns true if the form changed.
    pub fn handle_event(&mut self, event: FormEvent) -> bool {
        match event {
            FormEvent::SubmitFinished { cycle, result } => {
                if let Err(err) = &result {
                    tracing::warn!("Contact form submission {cycle} failed: {err}");
                }
                if !self.form.finish_submit(cycle, result) {
                    tracing::debug!(
                        "Ignoring stale submit result for cycle {cycle} (current {})",
                        self.form.cycle()
                    );
                    return false;
                }
                self.submit_task = None;

                if self.form.status() == SubmissionStatus::Success {
                    tracing::info!("Contact form submission {cycle} succeeded");
                    let events_tx = self.events_tx.clone();
                    self.revert_timer
                        .schedule(self.timing.revert_after, move || {
                            let _ = events_tx.send(FormEvent::StatusReverted { cycle });
                        });
                }
                true
            }
            FormEvent::StatusReverted { cycle } => self.form.revert_status(cycle),
        }
    }

    /// Drain completed background work without waiting
    pub fn poll_events(&mut self) -> bool {
        let mut changed = false;
        while let Ok(event) = self.events_rx.try_recv() {
            changed |= self.handle_event(event);
        }
        changed
    }

    /// Wait for the next completion notice
    #[cfg(test)]
    pub async fn next_event(&mut self) -> Option<FormEvent> {
        self.events_rx.recv().await
    }
}

impl Drop for ContactController {
    fn drop(&mut self) {
        if let Some(task) = self.submit_task.take() {
            task.abort();
        }
    }
}
