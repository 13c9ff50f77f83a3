use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SeatTypeLabel {
    Standard,
    Priority,
}

/// Feature object paired with every exported label.
///
/// Only `norm_row`/`norm_col` come from stored history; the rest are placeholders
/// and `incomplete_features` says so.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrainingFeatures {
    pub is_priority: u8,
    pub is_female: u8,
    pub is_in_group: u8,
    pub age: u32,
    pub disability: String,
    pub group_distance: f64,
    pub norm_row: f64,
    pub norm_col: f64,
    pub incomplete_features: bool,
}

/// Body of `GET /feedback`. Each entry serializes as a two-element array.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TrainingExport {
    pub seattype: Vec<(TrainingFeatures, SeatTypeLabel)>,
    pub penalty: Vec<(TrainingFeatures, i32)>,
}

impl TrainingExport {
    pub fn empty() -> Self {
        Self::default()
    }
}
