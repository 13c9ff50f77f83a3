//! Client side of the SmartBus relay: a typed HTTP client, the trip draft a booking
//! screen edits, and the seat grid the allocation result is drawn on.

pub mod client;
pub mod error;
pub mod seat_map;
pub mod trip;

pub use client::RelayClient;
pub use error::{ClientError, ClientResult};
pub use seat_map::SeatMap;
pub use trip::{PassengerDraft, TripDraft};
