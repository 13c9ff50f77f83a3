use std::sync::Arc;

use chrono::Utc;
use smartbus_shared::models::{
    AllocationRequest, AllocationResponse, FeedbackRequest, PassengerRequest, RouteRequest, Stop,
    VehicleConfig,
};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("departure and destination must be selected")]
    MissingRoute,
    #[error("vehicle layout must be chosen first")]
    MissingLayout,
    #[error("at least one passenger is required")]
    NoPassengers,
}

/// Length of the passenger id sent to the allocator.
pub const SHORT_ID_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq)]
pub struct PassengerDraft {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub disability: String,
    pub group_id: Option<String>,
    pub pickup_stop_id: Option<i64>,
    pub drop_stop_id: Option<i64>,
    pub seat_number: Option<String>,
}

impl PassengerDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            age: 18,
            gender: "Male".to_string(),
            disability: "None".to_string(),
            group_id: None,
            pickup_stop_id: None,
            drop_stop_id: None,
            seat_number: None,
        }
    }

    pub fn short_id(&self) -> &str {
        match self.id.char_indices().nth(SHORT_ID_LEN) {
            Some((idx, _)) => &self.id[..idx],
            None => &self.id,
        }
    }

    fn matches(&self, passenger_id: &str) -> bool {
        passenger_id == self.id || passenger_id == self.short_id()
    }
}

/// The trip being assembled on the booking screens.
///
/// Values are immutable: every edit returns a new draft and shares the untouched parts.
#[derive(Debug, Clone, Default)]
pub struct TripDraft {
    departure: Option<Stop>,
    destinations: Arc<Vec<Stop>>,
    layout: Option<VehicleConfig>,
    passengers: Arc<Vec<PassengerDraft>>,
}

impl TripDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn departure(&self) -> Option<&Stop> {
        self.departure.as_ref()
    }

    pub fn destinations(&self) -> &[Stop] {
        &self.destinations
    }

    pub fn layout(&self) -> Option<&VehicleConfig> {
        self.layout.as_ref()
    }

    pub fn passengers(&self) -> &[PassengerDraft] {
        &self.passengers
    }

    pub fn with_route(&self, departure: Stop, destinations: Vec<Stop>) -> Self {
        Self {
            departure: Some(departure),
            destinations: Arc::new(destinations),
            ..self.clone()
        }
    }

    pub fn with_layout(&self, layout: VehicleConfig) -> Self {
        Self {
            layout: Some(layout),
            ..self.clone()
        }
    }

    fn with_passenger_list(&self, passengers: Vec<PassengerDraft>) -> Self {
        Self {
            passengers: Arc::new(passengers),
            ..self.clone()
        }
    }

    pub fn with_passenger(&self, passenger: PassengerDraft) -> Self {
        let mut passengers = self.passengers.to_vec();
        passengers.push(passenger);
        self.with_passenger_list(passengers)
    }

    /// Replaces the passenger with the same id. Unknown ids leave the draft unchanged.
    pub fn update_passenger(&self, updated: PassengerDraft) -> Self {
        let passengers = self
            .passengers
            .iter()
            .map(|p| if p.id == updated.id { updated.clone() } else { p.clone() })
            .collect();
        self.with_passenger_list(passengers)
    }

    pub fn remove_passenger(&self, passenger_id: &str) -> Self {
        let passengers = self
            .passengers
            .iter()
            .filter(|p| p.id != passenger_id)
            .cloned()
            .collect();
        self.with_passenger_list(passengers)
    }

    pub fn build_request(&self) -> Result<AllocationRequest, DraftError> {
        self.build_request_for_trip(format!("TRIP-{}", Utc::now().timestamp_millis()))
    }

    /// Passengers without their own stops board at the departure and leave at the last destination.
    pub fn build_request_for_trip(&self, trip_id: String) -> Result<AllocationRequest, DraftError> {
        let departure = self.departure.as_ref().ok_or(DraftError::MissingRoute)?;
        let final_stop = self.destinations.last().ok_or(DraftError::MissingRoute)?;
        let layout = self.layout.as_ref().ok_or(DraftError::MissingLayout)?;
        if self.passengers.is_empty() {
            return Err(DraftError::NoPassengers);
        }

        let passengers = self
            .passengers
            .iter()
            .map(|p| PassengerRequest {
                id: p.short_id().to_string(),
                name: Some(p.name.clone()).filter(|n| !n.is_empty()),
                age: p.age,
                gender: p.gender.clone(),
                disability: p.disability.clone(),
                group_id: p.group_id.clone(),
                pickup_stop_id: p.pickup_stop_id.unwrap_or(departure.id),
                drop_stop_id: p.drop_stop_id.unwrap_or(final_stop.id),
            })
            .collect();

        Ok(AllocationRequest {
            trip_id: Some(trip_id),
            route: RouteRequest {
                departure: Some(departure.clone()),
                destinations: self.destinations.to_vec(),
            },
            vehicle: layout.clone(),
            passengers,
        })
    }

    /// Seats each passenger the allocator placed; others keep their previous seat.
    pub fn apply_assignments(&self, response: &AllocationResponse) -> Self {
        let passengers = self
            .passengers
            .iter()
            .map(|p| {
                match response.assignments.iter().find(|a| p.matches(&a.passenger_id)) {
                    Some(a) => PassengerDraft {
                        seat_number: Some(a.seat_id.clone()),
                        ..p.clone()
                    },
                    None => p.clone(),
                }
            })
            .collect();
        self.with_passenger_list(passengers)
    }

    /// One rating per seated passenger, all sharing the same score.
    pub fn feedback_requests(&self, rating: i32) -> Result<Vec<FeedbackRequest>, DraftError> {
        let layout = self.layout.as_ref().ok_or(DraftError::MissingLayout)?;
        Ok(self
            .passengers
            .iter()
            .filter_map(|p| {
                p.seat_number.as_ref().map(|seat| FeedbackRequest {
                    passenger_id: p.short_id().to_string(),
                    rating,
                    seat_label: seat.clone(),
                    total_rows: layout.rows,
                    total_cols: layout.columns,
                })
            })
            .collect())
    }
}
