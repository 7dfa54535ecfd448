use crate::domain::models::rsvp::{Guest, RsvpDraft};
use serde::{Deserialize, Serialize};

/// Wire shape of `POST /api/rsvp`. Both ends of the pipeline speak it, so it
/// serializes as well as deserializes. Absent fields default to empty: shape
/// policy (at least one guest) is the handler's call, not the decoder's.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RsvpRequest {
    #[serde(default)]
    pub guests: Vec<Guest>,
    #[serde(default)]
    pub message: String,
}

impl From<&RsvpDraft> for RsvpRequest {
    fn from(draft: &RsvpDraft) -> Self {
        Self {
            guests: draft.guests.clone(),
            message: draft.message.clone(),
        }
    }
}
