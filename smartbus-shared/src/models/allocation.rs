use serde::{Deserialize, Serialize};

fn default_vehicle_type() -> String {
    "AC Seater".to_string()
}

/// Body of `POST /allocate` as the AI service expects it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AllocationRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trip_id: Option<String>,
    #[serde(default)]
    pub route: RouteRequest,
    pub vehicle: VehicleConfig,
    pub passengers: Vec<PassengerRequest>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RouteRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure: Option<Stop>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub destinations: Vec<Stop>,
}

/// A pickup or drop point. `id` is the integer stop identifier the allocator orders stops by.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Stop {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VehicleConfig {
    pub rows: u32,
    pub columns: u32,
    #[serde(default = "default_vehicle_type")]
    pub vehicle_type: String,
}

impl VehicleConfig {
    pub fn new(rows: u32, columns: u32) -> Self {
        Self {
            rows,
            columns,
            vehicle_type: default_vehicle_type(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PassengerRequest {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub age: u32,
    pub gender: String,
    pub disability: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    pub pickup_stop_id: i64,
    pub drop_stop_id: i64,
}

/// What the AI service answers with, relayed untouched by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AllocationResponse {
    pub trip_id: String,
    pub assignments: Vec<SeatAssignment>,
}

/// One passenger's seat. Also the persisted shape of a booking assignment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SeatAssignment {
    pub passenger_id: String,
    pub seat_id: String,
    pub seat_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trip_id: Option<String>,
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub group_distance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub norm_row: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub norm_col: Option<f64>,
    #[serde(default)]
    pub explanation: String,
}
