//! Domain layer for studio-inquiry
//!
//! This crate contains the inquiry entity, its validation rules and the
//! content templates. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! ## Inquiry
//!
//! One contact-form submission. It exists in three shapes:
//!
//! - [`FormState`]: what the visitor typed, all plain strings
//! - [`InquiryRequest`]: the wire payload, every field optional
//! - [`Inquiry`]: the normalized record that gets persisted
//!
//! ## Validation
//!
//! The rule set lives in [`inquiry::validation`] and is applied twice: the
//! submission client collects every [`FieldError`], the handler stops at the
//! first [`RejectReason`] and then truncates with [`normalize`].

pub mod catalog;
pub mod core;
pub mod inquiry;
pub mod messages;
pub mod notification;

// Re-export commonly used types
pub use catalog::{BUDGET_RANGES, CatalogOption, PROJECT_TYPES};
pub use core::{error::DomainError, language::Language};
pub use inquiry::{
    entities::{Inquiry, InquiryRequest, StoredInquiry},
    field::Field,
    form::FormState,
    validation::{
        FieldError, FieldErrorKind, RejectReason, collect_violations, is_valid_email, normalize,
        validate_submission,
    },
};
pub use messages::ClientMessages;
pub use notification::template::{EmailContent, NotificationTemplate};
