use chrono::{DateTime, Utc};
use smartbus_shared::models::{FeedbackRequest, HistoryRecord};

use crate::seat::{normalize, SeatLabel};
use crate::CoreResult;

/// Turns a passenger rating into the history row the allocator learns from.
///
/// The rating is stored as given; seats outside the stated grid are not rejected.
pub fn history_from_feedback(
    req: &FeedbackRequest,
    created_at: DateTime<Utc>,
) -> CoreResult<HistoryRecord> {
    let seat = SeatLabel::parse(&req.seat_label)?;
    let norm = normalize(seat, req.total_rows, req.total_cols);

    Ok(HistoryRecord {
        passenger_id: req.passenger_id.clone(),
        norm_row: norm.norm_row,
        norm_col: norm.norm_col,
        feedback_score: req.rating,
        created_at,
    })
}
