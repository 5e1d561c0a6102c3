//! Request handlers

use super::response::{ApiError, SubmitResponse};
use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use inquiry_application::SubmitInquiryUseCase;
use inquiry_domain::InquiryRequest;
use std::sync::Arc;
use tokio::task::JoinError;
use tracing::{error, info};

/// Shared handler state
pub type AppState = Arc<SubmitInquiryUseCase>;

/// `POST {path}` - validate, persist, notify.
///
/// The body is parsed here instead of through the `Json` extractor so that
/// malformed input lands in the catch-all 500 branch with its parse message.
pub async fn submit_inquiry(State(use_case): State<AppState>, body: Bytes) -> Response {
    match handle_submission(use_case, &body).await {
        Ok(resp) => (StatusCode::OK, Json(resp)).into_response(),
        Err(e) => e.into_response(),
    }
}

async fn handle_submission(
    use_case: AppState,
    body: &[u8],
) -> Result<SubmitResponse, ApiError> {
    let request: InquiryRequest = serde_json::from_slice(body).map_err(|e| {
        error!("Unreadable inquiry body: {}", e);
        ApiError::Unexpected(e.to_string())
    })?;
    info!("Received inquiry (language: {})", request.language());

    // Run on its own task so a panic inside an adapter still yields a JSON 500.
    let receipt = tokio::spawn(async move { use_case.execute(&request).await })
        .await
        .map_err(|e| ApiError::Unexpected(join_error_message(e)))??;

    Ok(SubmitResponse {
        success: true,
        email_sent: receipt.email_sent(),
    })
}

fn join_error_message(err: JoinError) -> String {
    if !err.is_panic() {
        return err.to_string();
    }
    let payload = err.into_panic();
    let message = if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "handler panicked".to_string()
    };
    error!("Inquiry handler panicked: {}", message);
    message
}

/// `GET /health`
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
