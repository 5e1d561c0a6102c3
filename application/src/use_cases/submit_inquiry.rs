//! Submit Inquiry use case
//!
//! The handler pipeline for one submission:
//!
//! ```text
//! Received → Validating → Rejected
//!                       → Persisting → PersistFailed
//!                                    → Notifying → Responded
//! ```
//!
//! Persistence strictly precedes notification. A notification failure never
//! fails the request; it is reported through [`NotifyOutcome`] only.

use crate::config::NotificationSettings;
use crate::ports::inquiry_store::{InquiryStore, StoreError};
use crate::ports::notification_gateway::{EmailMessage, NotificationGateway};
use inquiry_domain::{Inquiry, InquiryRequest, NotificationTemplate, RejectReason, StoredInquiry};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Fatal outcomes of a submission
#[derive(Error, Debug)]
pub enum SubmitInquiryError {
    #[error("{0}")]
    Rejected(#[from] RejectReason),

    #[error("Failed to save inquiry: {0}")]
    PersistFailed(#[source] StoreError),
}

/// Result of the notification step, always folded into the response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifyOutcome {
    Delivered { message_id: Option<String> },
    Failed { reason: String },
}

impl NotifyOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, NotifyOutcome::Delivered { .. })
    }
}

/// Successful submission: the record is stored
#[derive(Debug, Clone)]
pub struct SubmissionReceipt {
    pub stored: StoredInquiry,
    pub notification: NotifyOutcome,
}

impl SubmissionReceipt {
    /// Value of the `emailSent` response flag
    pub fn email_sent(&self) -> bool {
        self.notification.is_delivered()
    }
}

/// Use case for handling one inquiry submission
pub struct SubmitInquiryUseCase {
    store: Arc<dyn InquiryStore>,
    notifier: Arc<dyn NotificationGateway>,
    settings: NotificationSettings,
}

impl SubmitInquiryUseCase {
    pub fn new(
        store: Arc<dyn InquiryStore>,
        notifier: Arc<dyn NotificationGateway>,
        settings: NotificationSettings,
    ) -> Self {
        Self {
            store,
            notifier,
            settings,
        }
    }

    /// Validate, persist, then notify.
    pub async fn execute(
        &self,
        request: &InquiryRequest,
    ) -> Result<SubmissionReceipt, SubmitInquiryError> {
        // Step 1 + 2: validate (fail fast) and normalize
        let inquiry = Inquiry::try_from(request).inspect_err(|reason| {
            info!("Inquiry rejected: {}", reason);
        })?;

        debug!(
            "Inquiry validated (language={}, contact={})",
            inquiry.language,
            inquiry.contact_channels()
        );

        // Step 3: persist; failure is terminal and skips notification
        let stored = self.store.insert(&inquiry).await.map_err(|e| {
            error!("Failed to persist inquiry: {:?}", e);
            SubmitInquiryError::PersistFailed(e)
        })?;

        info!("Inquiry {} persisted", stored.id);

        // Step 4: best-effort notification
        let notification = self.notify(&stored).await;

        Ok(SubmissionReceipt {
            stored,
            notification,
        })
    }

    async fn notify(&self, stored: &StoredInquiry) -> NotifyOutcome {
        let content = NotificationTemplate::render(&stored.inquiry);
        let message = EmailMessage {
            from: self.settings.sender.clone(),
            to: self.settings.operator_inbox.clone(),
            subject: content.subject,
            html: content.html,
            reply_to: stored.inquiry.email.clone(),
        };

        match self.notifier.send(&message).await {
            Ok(receipt) => {
                info!(
                    "Notification for inquiry {} sent ({})",
                    stored.id,
                    receipt.message_id.as_deref().unwrap_or("no id")
                );
                NotifyOutcome::Delivered {
                    message_id: receipt.message_id,
                }
            }
            Err(e) => {
                warn!("Notification for inquiry {} failed: {}", stored.id, e);
                NotifyOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}
