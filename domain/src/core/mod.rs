//! Core domain concepts shared across all subdomains.
//!
//! - [`language::Language`]: submission language (`ru` / `en`)
//! - [`error::DomainError`]: domain-level errors
//! - [`string`]: character-based trimming and truncation helpers

pub mod error;
pub mod language;
pub mod string;
