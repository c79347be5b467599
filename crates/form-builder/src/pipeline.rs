use std::sync::{Mutex, MutexGuard, PoisonError};

use form_spec::{DecodedErrors, OutboundPayload, Submission, duplicate_labels, validate};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::sender::FormSender;

pub const SUCCESS_NOTICE: &str = "Form submitted successfully!";
pub const FAILURE_MESSAGE: &str = "An error occurred while submitting the form.";

/// Where the pipeline stands in the current (or last) attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitPhase {
    #[default]
    Idle,
    Validating,
    Invalid,
    Sending,
    Succeeded,
    Failed,
}

impl SubmitPhase {
    /// `Invalid`, `Succeeded` and `Failed` rest like `Idle`.
    pub fn is_busy(self) -> bool {
        matches!(self, SubmitPhase::Validating | SubmitPhase::Sending)
    }
}

/// Result of one call to [`SubmissionPipeline::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Another attempt is still in flight; nothing was done.
    Busy,
    Invalid(DecodedErrors),
    Sent,
    Failed(String),
}

/// Error and acknowledgment state shown by the rendering surface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PipelineState {
    pub phase: SubmitPhase,
    pub errors: DecodedErrors,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

/// Validates and sends submissions, at most one in flight.
pub struct SubmissionPipeline<S> {
    sender: S,
    state: Mutex<PipelineState>,
}

impl<S: FormSender> SubmissionPipeline<S> {
    pub fn new(sender: S) -> Self {
        Self {
            sender,
            state: Mutex::new(PipelineState::default()),
        }
    }

    pub fn sender(&self) -> &S {
        &self.sender
    }

    pub fn state(&self) -> PipelineState {
        self.lock().clone()
    }

    pub fn phase(&self) -> SubmitPhase {
        self.lock().phase
    }

    pub fn is_busy(&self) -> bool {
        self.phase().is_busy()
    }

    /// Drops visible validation errors, e.g. after the user edits a field.
    pub fn clear_errors(&self) {
        let mut state = self.lock();
        if !state.phase.is_busy() {
            state.errors = DecodedErrors::default();
        }
    }

    pub async fn submit(&self, submission: Submission) -> SubmitOutcome {
        let payload = {
            let mut state = self.lock();
            if state.phase.is_busy() {
                debug!(phase = ?state.phase, "submit ignored while busy");
                return SubmitOutcome::Busy;
            }
            state.phase = SubmitPhase::Validating;
            state.errors = DecodedErrors::default();
            state.notice = None;

            match validate(&submission) {
                Err(errors) => {
                    info!(errors = errors.len(), "submission failed validation");
                    let decoded = errors.decode();
                    state.phase = SubmitPhase::Invalid;
                    state.errors = decoded.clone();
                    return SubmitOutcome::Invalid(decoded);
                }
                Ok(validated) => {
                    let duplicates = duplicate_labels(validated.fields());
                    if !duplicates.is_empty() {
                        warn!(labels = ?duplicates, "duplicate labels overwrite earlier values");
                    }
                    state.phase = SubmitPhase::Sending;
                    OutboundPayload::from_validated(&validated)
                }
            }
        };

        let mut in_flight = InFlight::new(&self.state);
        let result = self.sender.send(&payload).await;

        let mut state = self.lock();
        in_flight.settle();
        match result {
            Ok(()) => {
                info!(to = %payload.to, fields = payload.form_data.len(), "form submitted");
                state.phase = SubmitPhase::Succeeded;
                state.notice = Some(SUCCESS_NOTICE.to_string());
                SubmitOutcome::Sent
            }
            Err(err) => {
                warn!(error = %err, "form submission failed");
                state.phase = SubmitPhase::Failed;
                state.errors.message = Some(FAILURE_MESSAGE.to_string());
                SubmitOutcome::Failed(FAILURE_MESSAGE.to_string())
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, PipelineState> {
        lock_state(&self.state)
    }
}

/// Held across the outbound call. If the submit future is dropped before the
/// endpoint answers, the attempt resolves as `Failed` instead of leaving the
/// pipeline stuck in `Sending`.
struct InFlight<'a> {
    state: &'a Mutex<PipelineState>,
    settled: bool,
}

impl<'a> InFlight<'a> {
    fn new(state: &'a Mutex<PipelineState>) -> Self {
        Self {
            state,
            settled: false,
        }
    }

    fn settle(&mut self) {
        self.settled = true;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        let mut state = lock_state(self.state);
        if state.phase == SubmitPhase::Sending {
            warn!("submission dropped before the endpoint answered");
            state.phase = SubmitPhase::Failed;
            state.errors.message = Some(FAILURE_MESSAGE.to_string());
        }
    }
}

fn lock_state(state: &Mutex<PipelineState>) -> MutexGuard<'_, PipelineState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}
