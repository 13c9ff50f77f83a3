use axum::{
    extract::{rejection::JsonRejection, Json, State},
    routing::post,
    Router,
};
use serde_json::Value;
use tracing::info;

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/allocate", post(allocate_seats))
}

/// POST /allocate
/// Forwards the body to the allocator and returns its answer untouched.
async fn allocate_seats(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(payload) = payload.map_err(|e| AppError::ValidationError(e.body_text()))?;
    let trip_id = payload
        .get("tripId")
        .and_then(serde_json::Value::as_str)
        .unwrap_or("<unassigned>");
    info!("Received allocation request for trip {}", trip_id);

    let response = state
        .allocator
        .allocate(&payload)
        .await
        .map_err(|e| AppError::AllocationFailed(e.to_string()))?;

    info!("Allocator answered");
    Ok(Json(response))
}
