use async_trait::async_trait;
use chrono::{DateTime, Utc};
use smartbus_core::repository::BookingRepository;
use smartbus_shared::models::{Booking, NewBooking, SeatAssignment, VehicleConfig};
use sqlx::types::Json;
use sqlx::PgPool;
use std::error::Error;
use uuid::Uuid;

pub struct PostgresBookingRepository {
    pool: PgPool,
}

impl PostgresBookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct BookingRow {
    id: Uuid,
    trip_id: String,
    schema_version: i32,
    vehicle: Json<VehicleConfig>,
    assignments: Json<Vec<SeatAssignment>>,
    created_at: DateTime<Utc>,
}

impl From<BookingRow> for Booking {
    fn from(row: BookingRow) -> Self {
        Self {
            id: row.id,
            trip_id: row.trip_id,
            schema_version: row.schema_version,
            vehicle: row.vehicle.0,
            assignments: row.assignments.0,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl BookingRepository for PostgresBookingRepository {
    async fn insert(&self, booking: NewBooking) -> Result<Booking, Box<dyn Error + Send + Sync>> {
        let booking = Booking::from_new(booking, Utc::now());

        sqlx::query(
            r#"
            INSERT INTO bookings (id, trip_id, schema_version, vehicle, assignments, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(booking.id)
        .bind(&booking.trip_id)
        .bind(booking.schema_version)
        .bind(Json(&booking.vehicle))
        .bind(Json(&booking.assignments))
        .bind(booking.created_at)
        .execute(&self.pool)
        .await?;

        Ok(booking)
    }

    async fn list_recent(&self) -> Result<Vec<Booking>, Box<dyn Error + Send + Sync>> {
        let rows = sqlx::query_as::<_, BookingRow>(
            r#"
            SELECT id, trip_id, schema_version, vehicle, assignments, created_at
            FROM bookings
            ORDER BY created_at DESC, seq DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Booking::from).collect())
    }
}
