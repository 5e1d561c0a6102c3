//! Inquiry store port
//!
//! Defines how the handler appends inquiry records to durable storage.

use async_trait::async_trait;
use inquiry_domain::{Inquiry, StoredInquiry};
use thiserror::Error;

/// Errors that can occur while persisting an inquiry
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Store rejected the insert (HTTP {status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Unexpected store response: {0}")]
    UnexpectedResponse(String),
}

/// Append-only store of inquiry records
///
/// Each call appends one new record; there is no update or delete path and no
/// deduplication, so the same inquiry inserted twice yields two records.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait InquiryStore: Send + Sync {
    /// Append a record and return it with its generated identifier
    async fn insert(&self, inquiry: &Inquiry) -> Result<StoredInquiry, StoreError>;
}
