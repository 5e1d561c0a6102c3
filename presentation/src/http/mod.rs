//! HTTP surface of the inquiry handler

pub mod cors;
pub mod handlers;
pub mod response;
pub mod router;

pub use handlers::AppState;
pub use response::{ApiError, SubmitResponse};
pub use router::router;
