//! Response bodies of the inquiry endpoint

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use inquiry_application::SubmitInquiryError;
use inquiry_domain::RejectReason;
use serde::Serialize;

/// Generic body for persistence failures; details stay in the server log.
pub const PERSIST_FAILED_MESSAGE: &str = "Failed to save inquiry";

/// `200 {"success": true, "emailSent": bool}`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub success: bool,
    pub email_sent: bool,
}

/// Every non-200 outcome of the endpoint, rendered as `{"error": "..."}`.
#[derive(Debug)]
pub enum ApiError {
    /// Validation failure. HTTP 400.
    Rejected(RejectReason),
    /// Store write failed. HTTP 500 with a generic message.
    PersistFailed,
    /// Anything unexpected. HTTP 500 with the failure message.
    Unexpected(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Rejected(_) => StatusCode::BAD_REQUEST,
            ApiError::PersistFailed | ApiError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ApiError::Rejected(reason) => reason.to_string(),
            ApiError::PersistFailed => PERSIST_FAILED_MESSAGE.to_string(),
            ApiError::Unexpected(message) => message.clone(),
        }
    }
}

impl From<SubmitInquiryError> for ApiError {
    fn from(err: SubmitInquiryError) -> Self {
        match err {
            SubmitInquiryError::Rejected(reason) => ApiError::Rejected(reason),
            SubmitInquiryError::PersistFailed(_) => ApiError::PersistFailed,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(serde_json::json!({ "error": self.message() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inquiry_application::StoreError;

    #[test]
    fn status_code_mapping() {
        assert_eq!(
            ApiError::Rejected(RejectReason::NameRequired).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::PersistFailed.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::Unexpected("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn persist_failure_hides_details() {
        let err: ApiError = SubmitInquiryError::PersistFailed(StoreError::Rejected {
            status: 401,
            body: "invalid service key".to_string(),
        })
        .into();
        assert_eq!(err.message(), "Failed to save inquiry");
    }

    #[test]
    fn submit_response_is_camel_case() {
        let json = serde_json::to_value(SubmitResponse {
            success: true,
            email_sent: false,
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"success": true, "emailSent": false}));
    }
}
