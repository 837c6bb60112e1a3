//! Translation of service errors into HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::common::ServiceError;

/// An error ready to be rendered as an HTTP response.
///
/// Service errors convert via `From`; handlers use the constructors for
/// boundary-level rejections (e.g. an unrecognized status value).
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(message) => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message,
            },
            ServiceError::NotFound(kind) => Self {
                status: StatusCode::NOT_FOUND,
                message: format!("{kind} not found"),
            },
            ServiceError::Store(source) => {
                // Log the cause; the caller only sees an opaque message.
                tracing::error!(error = %source, "Database operation failed");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: "Internal server error".to_string(),
                }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}
