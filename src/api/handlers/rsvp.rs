use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::RsvpRequest;
use crate::api::dtos::responses::RsvpAccepted;
use crate::domain::services::rsvp_mail;
use crate::error::AppError;
use crate::state::AppState;

const EMPTY_GUEST_LIST: &str = "At least one guest is required";

/// Received -> Validated -> Rendered -> Dispatched -> Responded, with a
/// single escape to an error response from any step.
pub async fn submit_rsvp(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RsvpRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    // A body that fails to decode and a body with no guests get the same
    // rejection; the form never produces either.
    let Ok(Json(payload)) = payload else {
        return Err(AppError::Validation(EMPTY_GUEST_LIST.into()));
    };
    if payload.guests.is_empty() {
        return Err(AppError::Validation(EMPTY_GUEST_LIST.into()));
    }

    info!("Received RSVP with {} guest(s)", payload.guests.len());

    let email = rsvp_mail::compose(
        &state.config.email_from,
        &state.config.email_to,
        &payload.guests,
        &payload.message,
    );

    state.mailer.send(&email).await?;

    info!("RSVP email dispatched: {}", email.subject);

    Ok(Json(RsvpAccepted { success: true }))
}
