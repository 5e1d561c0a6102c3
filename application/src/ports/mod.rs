//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod inquiry_store;
pub mod inquiry_transport;
pub mod notification_gateway;
