//! HTTP email gateway for a Resend-compatible `POST /emails` API

use async_trait::async_trait;
use inquiry_application::{DeliveryReceipt, EmailMessage, NotificationError, NotificationGateway};
use serde::Deserialize;

/// Default provider endpoint
pub const DEFAULT_EMAIL_ENDPOINT: &str = "https://api.resend.com/emails";

#[derive(Debug, Deserialize)]
struct SendResponse {
    #[serde(default)]
    id: Option<String>,
}

/// Sends notification emails with a bearer API key
pub struct ResendNotificationGateway {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl ResendNotificationGateway {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_endpoint(DEFAULT_EMAIL_ENDPOINT, api_key)
    }

    pub fn with_endpoint(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }
}

/// The provider answers `{"id": "..."}`; anything else still counts as sent.
fn parse_receipt(body: &str) -> DeliveryReceipt {
    let message_id = serde_json::from_str::<SendResponse>(body)
        .ok()
        .and_then(|r| r.id);
    DeliveryReceipt { message_id }
}

#[async_trait]
impl NotificationGateway for ResendNotificationGateway {
    async fn send(&self, message: &EmailMessage) -> Result<DeliveryReceipt, NotificationError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(message)
            .send()
            .await
            .map_err(|e| NotificationError::ConnectionError(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| NotificationError::InvalidResponse(e.to_string()))?;

        if !status.is_success() {
            return Err(NotificationError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(parse_receipt(&body))
    }
}
