use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Failures surface as a flat JSON body; details stay in the server log.
#[derive(Debug)]
pub enum AppError {
    ValidationError(String),
    AllocationFailed(String),
    FeedbackFailed(String),
    StorageError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::ValidationError(msg) => {
                tracing::warn!("Rejected request: {}", msg);
                (StatusCode::UNPROCESSABLE_ENTITY, json!({ "error": msg }))
            }
            AppError::AllocationFailed(msg) => {
                tracing::error!("Error talking to allocator: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Failed to allocate seats" }),
                )
            }
            AppError::FeedbackFailed(msg) => {
                tracing::error!("Feedback rejected: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Failed to record feedback" }),
                )
            }
            AppError::StorageError(msg) => {
                tracing::error!("Storage failure: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, json!({ "status": "error" }))
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<smartbus_core::CoreError> for AppError {
    fn from(err: smartbus_core::CoreError) -> Self {
        match err {
            smartbus_core::CoreError::InvalidSeatLabel(msg) => AppError::FeedbackFailed(msg),
            smartbus_core::CoreError::ValidationError(msg) => AppError::ValidationError(msg),
        }
    }
}
