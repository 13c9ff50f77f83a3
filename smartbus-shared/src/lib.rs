pub mod models;

/// Version segment every relay route is also mounted under.
pub const API_VERSION: &str = "v1";

/// Schema version stamped on every stored booking.
pub const BOOKING_SCHEMA_VERSION: i32 = 1;
