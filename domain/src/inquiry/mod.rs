//! Inquiry subdomain: the single contact-form submission type.

pub mod entities;
pub mod field;
pub mod form;
pub mod validation;
