use async_trait::async_trait;
use chrono::{DateTime, Utc};
use smartbus_core::repository::{BookingRepository, HistoryRepository};
use smartbus_shared::models::{Booking, HistoryRecord, NewBooking};
use std::error::Error;
use tokio::sync::RwLock;

/// History kept in process memory. Used when no database is configured.
#[derive(Default)]
pub struct InMemoryHistoryRepository {
    rows: RwLock<Vec<HistoryRecord>>,
}

impl InMemoryHistoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HistoryRepository for InMemoryHistoryRepository {
    async fn append(&self, record: &HistoryRecord) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.rows.write().await.push(record.clone());
        Ok(())
    }

    async fn find_by_passenger(
        &self,
        passenger_id: &str,
    ) -> Result<Vec<HistoryRecord>, Box<dyn Error + Send + Sync>> {
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .filter(|r| r.passenger_id == passenger_id)
            .cloned()
            .collect())
    }

    async fn list_all(
        &self,
        since: Option<DateTime<Utc>>,
    ) -> Result<Vec<HistoryRecord>, Box<dyn Error + Send + Sync>> {
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .filter(|r| since.map_or(true, |s| r.created_at >= s))
            .cloned()
            .collect())
    }
}

/// Bookings kept in process memory, in insertion order.
#[derive(Default)]
pub struct InMemoryBookingRepository {
    bookings: RwLock<Vec<Booking>>,
}

impl InMemoryBookingRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Orders by `created_at` descending; equal timestamps keep the later insert first.
pub fn newest_first(bookings: &[Booking]) -> Vec<Booking> {
    let mut sorted: Vec<Booking> = bookings.iter().rev().cloned().collect();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn insert(&self, booking: NewBooking) -> Result<Booking, Box<dyn Error + Send + Sync>> {
        let booking = Booking::from_new(booking, Utc::now());
        self.bookings.write().await.push(booking.clone());
        Ok(booking)
    }

    async fn list_recent(&self) -> Result<Vec<Booking>, Box<dyn Error + Send + Sync>> {
        let bookings = self.bookings.read().await;
        Ok(newest_first(&bookings))
    }
}
