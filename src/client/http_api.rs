use crate::api::dtos::requests::RsvpRequest;
use crate::domain::models::rsvp::RsvpDraft;
use crate::domain::ports::RsvpApi;
use crate::error::AppError;
use async_trait::async_trait;
use reqwest::Client;
use tracing::error;

/// Submission transport against the live service. Rejections, server faults
/// and connection errors all come back as `Err`; the controller does not
/// tell them apart.
pub struct HttpRsvpApi {
    client: Client,
    base_url: String,
}

impl HttpRsvpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl RsvpApi for HttpRsvpApi {
    async fn submit(&self, draft: &RsvpDraft) -> Result<(), AppError> {
        let payload = RsvpRequest::from(draft);

        let res = self
            .client
            .post(format!("{}/api/rsvp", self.base_url))
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                let msg = format!("RSVP request error: {}", e);
                error!("{}", msg);
                AppError::InternalWithMsg(msg)
            })?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            let msg = format!("RSVP submission rejected. Status: {}, Body: {}", status, text);
            error!("{}", msg);
            return Err(AppError::InternalWithMsg(msg));
        }

        Ok(())
    }
}
