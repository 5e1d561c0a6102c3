//! Inquiry store adapters implementing the
//! [`InquiryStore`](inquiry_application::InquiryStore) port.
//!
//! - [`RestInquiryStore`]: hosted table behind a REST insert endpoint
//! - [`JsonlInquiryStore`]: local append-only JSONL file
//! - [`InMemoryInquiryStore`]: process memory

mod jsonl;
mod memory;
mod rest;

pub use jsonl::JsonlInquiryStore;
pub use memory::InMemoryInquiryStore;
pub use rest::RestInquiryStore;
