//! Presentation layer for studio-inquiry
//!
//! This crate contains the HTTP surface of the inquiry handler,
//! CLI definitions, and console output formatting.

pub mod cli;
pub mod http;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, SubmitArgs};
pub use http::{ApiError, AppState, SubmitResponse, router};
pub use output::console::ConsoleFormatter;
