//! Inquiry transport port
//!
//! How the submission client reaches the inquiry handler.

use async_trait::async_trait;
use inquiry_domain::{InquiryRequest, RejectReason};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while delivering a submission to the handler
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Handler returned HTTP {status}: {}", .reason.as_deref().unwrap_or("no reason"))]
    Status { status: u16, reason: Option<String> },

    #[error("Invalid handler response: {0}")]
    InvalidResponse(String),
}

impl TransportError {
    /// Validation reason when the handler answered 400 with a known reason.
    pub fn reject_reason(&self) -> Option<RejectReason> {
        match self {
            TransportError::Status {
                status: 400,
                reason: Some(reason),
            } => RejectReason::from_wire(reason),
            _ => None,
        }
    }
}

/// Body of a 200 response from the handler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionAck {
    pub success: bool,
    pub email_sent: bool,
}

/// Transport used by the submission client
#[async_trait]
pub trait InquiryTransport: Send + Sync {
    /// Send one payload. Exactly one request per call; no retries.
    async fn submit(&self, payload: &InquiryRequest) -> Result<SubmissionAck, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ack_wire_shape() {
        let ack: SubmissionAck =
            serde_json::from_str(r#"{"success":true,"emailSent":false}"#).unwrap();
        assert!(ack.success);
        assert!(!ack.email_sent);
    }

    #[test]
    fn test_reject_reason_only_for_400() {
        let err = TransportError::Status {
            status: 400,
            reason: Some("Invalid email format".to_string()),
        };
        assert_eq!(err.reject_reason(), Some(RejectReason::InvalidEmail));

        let err = TransportError::Status {
            status: 500,
            reason: Some("Failed to save inquiry".to_string()),
        };
        assert_eq!(err.reject_reason(), None);
        assert_eq!(
            err.to_string(),
            "Handler returned HTTP 500: Failed to save inquiry"
        );
    }
}
