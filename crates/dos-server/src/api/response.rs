//! API response types
//!
//! Every failure leaves the server as a DOS error body, `{"msg": "..."}`.
//! Handlers return [`ApiResult`] and the conversion to a status code and
//! body happens once, here.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dos_common::types::ErrorResponse;

/// Application error type that can be converted to HTTP responses
#[derive(Debug)]
pub enum ApiError {
    /// 404 carrying a human-readable message
    NotFound(String),
    /// An upstream status forwarded to the caller
    Upstream { status: StatusCode, message: String },
    BadRequest(String),
    Internal(String),
}

impl ApiError {
    /// Pick the status to forward for a failed upstream call.
    ///
    /// Error statuses pass through. Anything else GDC could answer with
    /// (a redirect, an unexpected 2xx) is reported as a bad gateway.
    pub fn upstream(status: StatusCode, message: impl Into<String>) -> Self {
        let status = if status.is_client_error() || status.is_server_error() {
            status
        } else {
            StatusCode::BAD_GATEWAY
        };
        ApiError::Upstream {
            status,
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Upstream { status, .. } => *status,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let msg = match self {
            ApiError::NotFound(msg) | ApiError::BadRequest(msg) => msg,
            ApiError::Upstream { message, .. } => message,
            ApiError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                msg
            },
        };

        (status, Json(ErrorResponse::new(msg))).into_response()
    }
}

impl From<dos_common::DosError> for ApiError {
    fn from(err: dos_common::DosError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

/// Alias for Result with ApiError
pub type ApiResult<T> = Result<T, ApiError>;
