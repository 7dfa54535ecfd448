use crate::domain::models::{email::OutboundEmail, rsvp::RsvpDraft};
use crate::error::AppError;
use async_trait::async_trait;

/// Outbound mail capability. Dispatch is fire-and-forget with respect to
/// delivery: Ok means the transport accepted the message, nothing more.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> Result<(), AppError>;
}

/// Submission capability consumed by the form controller. The wire encoding
/// is an adapter concern; the port speaks in drafts.
#[async_trait]
pub trait RsvpApi: Send + Sync {
    async fn submit(&self, draft: &RsvpDraft) -> Result<(), AppError>;
}
