use smartbus_shared::models::{HistoryRecord, SeatTypeLabel, TrainingExport, TrainingFeatures};

/// Scores at or above this are labelled `Standard`.
pub const STANDARD_SCORE_THRESHOLD: i32 = 4;

const PLACEHOLDER_AGE: u32 = 30;
const PLACEHOLDER_DISABILITY: &str = "None";

pub fn seat_type_for_score(score: i32) -> SeatTypeLabel {
    if score >= STANDARD_SCORE_THRESHOLD {
        SeatTypeLabel::Standard
    } else {
        SeatTypeLabel::Priority
    }
}

/// History rows carry no passenger attributes, so those features are fixed placeholders.
fn features_for(record: &HistoryRecord) -> TrainingFeatures {
    TrainingFeatures {
        is_priority: 0,
        is_female: 0,
        is_in_group: 0,
        age: PLACEHOLDER_AGE,
        disability: PLACEHOLDER_DISABILITY.to_string(),
        group_distance: 0.0,
        norm_row: record.norm_row,
        norm_col: record.norm_col,
        incomplete_features: true,
    }
}

/// Reshapes history into the seat-type and penalty training sets, one entry per row in order.
pub fn build_training_export(records: &[HistoryRecord]) -> TrainingExport {
    let mut export = TrainingExport {
        seattype: Vec::with_capacity(records.len()),
        penalty: Vec::with_capacity(records.len()),
    };

    for record in records {
        let features = features_for(record);
        export
            .seattype
            .push((features.clone(), seat_type_for_score(record.feedback_score)));
        export.penalty.push((features, record.feedback_score));
    }

    export
}
