use axum::{
    extract::{rejection::JsonRejection, Json, State},
    routing::{get, post},
    Router,
};
use serde_json::Value;
use smartbus_core::booking::validate_booking;
use smartbus_shared::models::{Booking, BookingStored, NewBooking};
use tracing::info;

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/allocations", post(store_allocation))
        .route("/bookings", get(list_bookings))
}

/// POST /allocations
/// Persists a completed allocation. Documents that do not match the booking schema are rejected.
async fn store_allocation(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<BookingStored>, AppError> {
    let Json(payload) = payload.map_err(|e| AppError::ValidationError(e.body_text()))?;
    let booking: NewBooking = serde_json::from_value(payload)
        .map_err(|e| AppError::ValidationError(format!("booking does not match schema: {}", e)))?;
    validate_booking(&booking)?;

    info!("Saving allocation for trip {}", booking.trip_id);
    let stored = state
        .booking_repo
        .insert(booking)
        .await
        .map_err(|e| AppError::StorageError(e.to_string()))?;

    Ok(Json(BookingStored {
        status: "stored".to_string(),
        trip_id: stored.trip_id,
        id: stored.id,
    }))
}

/// GET /bookings
/// Newest first, unpaginated.
async fn list_bookings(State(state): State<AppState>) -> Result<Json<Vec<Booking>>, AppError> {
    let bookings = state
        .booking_repo
        .list_recent()
        .await
        .map_err(|e| AppError::StorageError(e.to_string()))?;

    Ok(Json(bookings))
}
