//! reqwest-based transport from the submission client to the handler

use async_trait::async_trait;
use inquiry_application::{InquiryTransport, SubmissionAck, TransportError};
use inquiry_domain::InquiryRequest;
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Posts submissions as JSON to the handler URL
pub struct HttpInquiryTransport {
    client: reqwest::Client,
    endpoint: String,
    anon_key: Option<String>,
}

impl HttpInquiryTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            anon_key: None,
        }
    }

    /// Public key sent as `apikey` and bearer token.
    pub fn with_anon_key(mut self, key: Option<String>) -> Self {
        self.anon_key = key.filter(|k| !k.trim().is_empty());
        self
    }
}

/// `{"error": reason}` from a non-2xx body, when present.
fn parse_error_reason(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body).ok().map(|b| b.error)
}

fn parse_ack(body: &str) -> Result<SubmissionAck, TransportError> {
    let ack: SubmissionAck = serde_json::from_str(body)
        .map_err(|e| TransportError::InvalidResponse(format!("{}: {}", e, body)))?;
    if !ack.success {
        return Err(TransportError::InvalidResponse(
            "handler answered success=false".to_string(),
        ));
    }
    Ok(ack)
}

#[async_trait]
impl InquiryTransport for HttpInquiryTransport {
    async fn submit(&self, payload: &InquiryRequest) -> Result<SubmissionAck, TransportError> {
        let mut request = self.client.post(&self.endpoint).json(payload);
        if let Some(key) = &self.anon_key {
            request = request.header("apikey", key).bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        debug!("Handler answered HTTP {}", status.as_u16());

        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                reason: parse_error_reason(&body),
            });
        }

        parse_ack(&body)
    }
}
