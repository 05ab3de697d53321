// --- File: crates/gymbook_common/src/http.rs ---
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::error::{GymbookError, HttpStatusCode};

/// Extension trait for GymbookError to convert it to an Axum HTTP response.
pub trait IntoHttpResponse {
    /// Converts the error into an Axum HTTP response.
    fn into_http_response(self) -> Response;
}

impl IntoHttpResponse for GymbookError {
    fn into_http_response(self) -> Response {
        let status_code =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // The web client reads `error` as a plain string.
        let body = Json(json!({
            "error": self.message(),
            "code": status_code.as_u16(),
        }));

        (status_code, body).into_response()
    }
}

/// Implement IntoResponse for GymbookError so handlers can return `Result<_, GymbookError>`.
impl IntoResponse for GymbookError {
    fn into_response(self) -> Response {
        self.into_http_response()
    }
}

/// A request body that fails to parse is a validation error, reported in the
/// same `{error, code}` shape as every other failure.
impl From<JsonRejection> for GymbookError {
    fn from(rejection: JsonRejection) -> Self {
        GymbookError::ValidationError(rejection.body_text())
    }
}
