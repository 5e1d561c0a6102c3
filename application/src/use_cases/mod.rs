//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod submission_client;
pub mod submit_inquiry;
