//! Notification gateway port
//!
//! Defines the interface for sending the operator email.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while sending a notification
#[derive(Error, Debug)]
pub enum NotificationError {
    #[error("Notifications are disabled")]
    Disabled,

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Provider rejected the message (HTTP {status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),
}

/// An outgoing email, in the provider's request shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailMessage {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
}

/// Provider acknowledgement of an accepted message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliveryReceipt {
    /// Provider-side message identifier, when returned
    pub message_id: Option<String>,
}

/// Gateway to the email provider
#[async_trait]
pub trait NotificationGateway: Send + Sync {
    async fn send(&self, message: &EmailMessage) -> Result<DeliveryReceipt, NotificationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_message_request_shape() {
        let message = EmailMessage {
            from: "Studio <noreply@studio.kz>".to_string(),
            to: vec!["hello@studio.kz".to_string()],
            subject: "New website inquiry: Bob".to_string(),
            html: "<p>hi</p>".to_string(),
            reply_to: None,
        };
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "from": "Studio <noreply@studio.kz>",
                "to": ["hello@studio.kz"],
                "subject": "New website inquiry: Bob",
                "html": "<p>hi</p>",
            })
        );
    }
}
