//! Application layer for studio-inquiry
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::NotificationSettings;
pub use ports::{
    inquiry_store::{InquiryStore, StoreError},
    inquiry_transport::{InquiryTransport, SubmissionAck, TransportError},
    notification_gateway::{DeliveryReceipt, EmailMessage, NotificationError, NotificationGateway},
};
pub use use_cases::submission_client::{SubmissionClient, SubmissionPhase, SubmitOutcome};
pub use use_cases::submit_inquiry::{
    NotifyOutcome, SubmissionReceipt, SubmitInquiryError, SubmitInquiryUseCase,
};
