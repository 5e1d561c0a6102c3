//! Notification gateway adapters implementing the
//! [`NotificationGateway`](inquiry_application::NotificationGateway) port.

mod resend;

pub use resend::{DEFAULT_EMAIL_ENDPOINT, ResendNotificationGateway};

use async_trait::async_trait;
use inquiry_application::{DeliveryReceipt, EmailMessage, NotificationError, NotificationGateway};
use tracing::debug;

/// Gateway used when notifications are switched off in configuration.
///
/// Every send reports [`NotificationError::Disabled`], so responses carry
/// `emailSent: false`.
pub struct DisabledNotificationGateway;

#[async_trait]
impl NotificationGateway for DisabledNotificationGateway {
    async fn send(&self, message: &EmailMessage) -> Result<DeliveryReceipt, NotificationError> {
        debug!("Notification '{}' skipped: disabled", message.subject);
        Err(NotificationError::Disabled)
    }
}
