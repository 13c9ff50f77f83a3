use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One stored feedback row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryRecord {
    #[serde(rename = "passengerId")]
    pub passenger_id: String,
    pub norm_row: f64,
    pub norm_col: f64,
    pub feedback_score: i32,
    pub created_at: DateTime<Utc>,
}

/// The three fields the allocator trains its per-passenger model on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct HistoryPoint {
    pub norm_row: f64,
    pub norm_col: f64,
    pub feedback_score: i32,
}

impl From<&HistoryRecord> for HistoryPoint {
    fn from(record: &HistoryRecord) -> Self {
        Self {
            norm_row: record.norm_row,
            norm_col: record.norm_col,
            feedback_score: record.feedback_score,
        }
    }
}
