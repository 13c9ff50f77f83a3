use async_trait::async_trait;
use chrono::{DateTime, Utc};
use smartbus_shared::models::{Booking, HistoryRecord, NewBooking};

/// Append-only store of passenger feedback rows
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    async fn append(
        &self,
        record: &HistoryRecord,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    async fn find_by_passenger(
        &self,
        passenger_id: &str,
    ) -> Result<Vec<HistoryRecord>, Box<dyn std::error::Error + Send + Sync>>;

    /// All rows in insertion order, optionally only those created at or after `since`.
    async fn list_all(
        &self,
        since: Option<DateTime<Utc>>,
    ) -> Result<Vec<HistoryRecord>, Box<dyn std::error::Error + Send + Sync>>;
}

/// Store of allocation snapshots
#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn insert(
        &self,
        booking: NewBooking,
    ) -> Result<Booking, Box<dyn std::error::Error + Send + Sync>>;

    /// Newest first.
    async fn list_recent(
        &self,
    ) -> Result<Vec<Booking>, Box<dyn std::error::Error + Send + Sync>>;
}
