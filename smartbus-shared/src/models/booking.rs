use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::allocation::{SeatAssignment, VehicleConfig};

/// Body of `POST /allocations`: the snapshot of one completed allocation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub trip_id: String,
    pub vehicle: VehicleConfig,
    pub assignments: Vec<SeatAssignment>,
}

/// A stored booking, as listed by `GET /bookings`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Uuid,
    pub trip_id: String,
    pub schema_version: i32,
    pub vehicle: VehicleConfig,
    pub assignments: Vec<SeatAssignment>,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn from_new(new: NewBooking, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            trip_id: new.trip_id,
            schema_version: crate::BOOKING_SCHEMA_VERSION,
            vehicle: new.vehicle,
            assignments: new.assignments,
            created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingStored {
    pub status: String,
    pub trip_id: String,
    pub id: Uuid,
}
