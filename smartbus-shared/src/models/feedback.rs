use serde::{Deserialize, Serialize};

/// Body of `POST /feedback`, sent once per seated passenger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRequest {
    pub passenger_id: String,
    /// Expected 1..=5, stored as given.
    pub rating: i32,
    pub seat_label: String,
    pub total_rows: u32,
    pub total_cols: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeedbackStored {
    pub status: String,
    #[serde(rename = "passengerId")]
    pub passenger_id: String,
    pub norm_row: f64,
    pub norm_col: f64,
}
