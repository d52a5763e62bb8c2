use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use flowgen_core::error::FlowgenError;

/// Handler error rendered as `{"error": message}` with a matching status.
#[derive(Debug)]
pub struct ApiError(pub FlowgenError);

impl From<FlowgenError> for ApiError {
    fn from(e: FlowgenError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            FlowgenError::NotFound(_) => (StatusCode::NOT_FOUND, "Flowchart not found".to_string()),
            FlowgenError::InvalidInput(_) => (StatusCode::BAD_REQUEST, self.0.to_string()),
            other => (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
