use std::sync::Arc;

use tracing::warn;

use crate::domain::models::rsvp::{GuestField, RsvpDraft};
use crate::domain::models::translation::RsvpFormCopy;
use crate::domain::ports::RsvpApi;

/// Result of the most recent submit attempt. `Success` and `Error` are
/// terminal for that attempt; a manual retry re-enters the pending phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Idle,
    Success,
    Error(String),
}

/// Client-side owner of the RSVP dialog: draft lifecycle, input constraints
/// the UI is responsible for, and the submission state machine. One network
/// call per `submit`, no automatic retry.
pub struct RsvpFormController {
    api: Arc<dyn RsvpApi>,
    copy: RsvpFormCopy,
    draft: RsvpDraft,
    outcome: SubmissionOutcome,
    submitting: bool,
}

impl RsvpFormController {
    /// `copy` is the selected language's form text; the controller only ever
    /// reads its `error_message`, and which bundle is active never changes
    /// what goes over the wire.
    pub fn new(api: Arc<dyn RsvpApi>, copy: RsvpFormCopy) -> Self {
        Self {
            api,
            copy,
            draft: RsvpDraft::new(),
            outcome: SubmissionOutcome::Idle,
            submitting: false,
        }
    }

    pub fn open_dialog(&mut self) {
        self.outcome = SubmissionOutcome::Idle;
        self.draft = RsvpDraft::new();
    }

    /// Resets the outcome only; an abandoned draft is discarded by the next
    /// `open_dialog`, never submitted.
    pub fn close_dialog(&mut self) {
        self.outcome = SubmissionOutcome::Idle;
    }

    pub fn add_guest(&mut self) {
        self.draft.add_guest();
    }

    pub fn update_guest(&mut self, index: usize, field: GuestField, value: &str) {
        self.draft.update_guest(index, field, value);
    }

    pub fn update_message(&mut self, value: &str) {
        self.draft.update_message(value);
    }

    /// Submits the current draft. Blocked without a network call while a
    /// submission is in flight or while guest #1 has no name (the
    /// required-field gate). On success the draft resets to its initial
    /// shape but the dialog stays open to show the success state; on any
    /// failure the draft is kept so the guest can retry without re-typing.
    pub async fn submit(&mut self) {
        if self.submitting || !self.draft.is_submittable() {
            return;
        }

        self.submitting = true;
        let result = self.api.submit(&self.draft).await;
        match result {
            Ok(()) => {
                self.draft = RsvpDraft::new();
                self.outcome = SubmissionOutcome::Success;
            }
            Err(err) => {
                warn!("RSVP submission failed: {}", err);
                self.outcome = SubmissionOutcome::Error(self.copy.error_message.clone());
            }
        }
        self.submitting = false;
    }

    pub fn draft(&self) -> &RsvpDraft {
        &self.draft
    }

    pub fn outcome(&self) -> &SubmissionOutcome {
        &self.outcome
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }
}
