use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Required query parameter missing or malformed. Deliberately carries no
    /// per-field detail.
    #[error("Invalid query parameters")]
    InvalidQuery,

    /// Upstream call failed or returned something unusable. `message` is the
    /// public per-route text; `detail` stays server-side.
    #[error("{message}")]
    UpstreamFailure {
        message: String,
        detail: anyhow::Error,
    },
}

/// Helper for wrapping an upstream error with its public route message.
pub fn upstream_failure(message: &str, detail: anyhow::Error) -> AppError {
    AppError::UpstreamFailure {
        message: message.to_string(),
        detail,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            AppError::InvalidQuery => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Invalid query parameters" })),
            )
                .into_response(),
            AppError::UpstreamFailure { message, detail } => {
                error!("{}: {:#}", message, detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "status": "ERROR", "message": message })),
                )
                    .into_response()
            }
        }
    }
}
