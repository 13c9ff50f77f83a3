use smartbus_shared::models::NewBooking;

use crate::seat::SeatLabel;
use crate::{CoreError, CoreResult};

/// Checks a booking snapshot before it is stored. Nothing that fails here is persisted.
///
/// Repeated `trip_id`s are allowed; every submission becomes its own booking.
pub fn validate_booking(booking: &NewBooking) -> CoreResult<()> {
    if booking.trip_id.trim().is_empty() {
        return Err(CoreError::ValidationError("tripId must not be empty".to_string()));
    }

    let rows = booking.vehicle.rows;
    let cols = booking.vehicle.columns;
    if rows == 0 || cols == 0 {
        return Err(CoreError::ValidationError(format!(
            "vehicle must have at least one row and column, got {}x{}",
            rows, cols
        )));
    }

    for assignment in &booking.assignments {
        if assignment.passenger_id.trim().is_empty() {
            return Err(CoreError::ValidationError(format!(
                "assignment for seat {} has no passengerId",
                assignment.seat_id
            )));
        }
        let seat = SeatLabel::parse(&assignment.seat_id)
            .map_err(|e| CoreError::ValidationError(e.to_string()))?;
        if !seat.fits(rows, cols) {
            return Err(CoreError::ValidationError(format!(
                "seat {} is outside a {}x{} vehicle",
                assignment.seat_id, rows, cols
            )));
        }
    }

    Ok(())
}
