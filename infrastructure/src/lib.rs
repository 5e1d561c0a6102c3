//! Infrastructure layer for studio-inquiry
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod notification;
pub mod persistence;
pub mod transport;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileClientConfig, FileConfig, FileNotificationConfig,
    FileServerConfig, FileStoreBackend, FileStoreConfig, SecretError, Secrets,
};
pub use notification::{DisabledNotificationGateway, ResendNotificationGateway};
pub use persistence::{InMemoryInquiryStore, JsonlInquiryStore, RestInquiryStore};
pub use transport::HttpInquiryTransport;
