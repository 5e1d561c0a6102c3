//! Operator notification content.

pub mod template;
