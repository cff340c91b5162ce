//! Error-to-response mapping for the HTTP layer.

use crate::errors::Error;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Builds a JSON error body of the form `{"error": code, "message": message}`.
pub fn json_error(status: StatusCode, code: &'static str, message: impl Into<String>) -> Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ProductNotFound { .. } => {
                json_error(StatusCode::NOT_FOUND, "not_found", self.to_string())
            }
            Self::Database(ref e) => {
                tracing::error!("Database error while handling request: {}", e);
                json_error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "database_error",
                    self.to_string(),
                )
            }
            Self::Config { .. } | Self::Io(_) => {
                tracing::error!("Internal error while handling request: {}", self);
                json_error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    self.to_string(),
                )
            }
        }
    }
}
