use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::application::errors::{
    CustomerError, ListError, QueueError, StatsError, UploadError,
};

/// Message returned when a form endpoint receives another content type
pub const INVALID_CONTENT_TYPE: &str = "Invalid content type. Expected form data.";

/// API error response.
///
/// `Detailed` renders `{success:false, message}`, `Opaque` renders the
/// status alone, `Report` renders `{error}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    Detailed { status: StatusCode, message: String },
    Opaque(StatusCode),
    Report { status: StatusCode, message: String },
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::Detailed {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal_error() -> Self {
        ApiError::Opaque(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn invalid_content_type() -> Self {
        Self::bad_request(INVALID_CONTENT_TYPE)
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Detailed { status, .. } | ApiError::Report { status, .. } => *status,
            ApiError::Opaque(status) => *status,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Detailed { status, message } => (
                status,
                Json(json!({
                    "success": false,
                    "message": message,
                })),
            )
                .into_response(),
            ApiError::Opaque(status) => status.into_response(),
            ApiError::Report { status, message } => {
                (status, Json(json!({ "error": message }))).into_response()
            }
        }
    }
}

// Convert use case errors to API errors

impl From<UploadError> for ApiError {
    fn from(err: UploadError) -> Self {
        ApiError::bad_request(err.to_string())
    }
}

impl From<ListError> for ApiError {
    fn from(err: ListError) -> Self {
        ApiError::bad_request(err.to_string())
    }
}

impl From<QueueError> for ApiError {
    fn from(err: QueueError) -> Self {
        match err {
            QueueError::InvalidRequest(msg) => ApiError::bad_request(msg),
            QueueError::Backend(_) => ApiError::internal_error(),
        }
    }
}

impl From<CustomerError> for ApiError {
    fn from(err: CustomerError) -> Self {
        match err {
            CustomerError::InvalidRequest(msg) => ApiError::bad_request(msg),
            CustomerError::Domain(_) | CustomerError::Backend(_) => ApiError::internal_error(),
        }
    }
}

impl From<StatsError> for ApiError {
    fn from(err: StatsError) -> Self {
        ApiError::Report {
            status: StatusCode::BAD_REQUEST,
            message: err.to_string(),
        }
    }
}
