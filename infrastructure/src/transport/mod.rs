//! Transport adapters implementing the
//! [`InquiryTransport`](inquiry_application::InquiryTransport) port.

mod http;

pub use http::HttpInquiryTransport;
