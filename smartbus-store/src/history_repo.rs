use async_trait::async_trait;
use chrono::{DateTime, Utc};
use smartbus_core::repository::HistoryRepository;
use smartbus_shared::models::HistoryRecord;
use sqlx::PgPool;
use std::error::Error;

pub struct PostgresHistoryRepository {
    pool: PgPool,
}

impl PostgresHistoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct HistoryRow {
    passenger_id: String,
    norm_row: f64,
    norm_col: f64,
    feedback_score: i32,
    created_at: DateTime<Utc>,
}

impl From<HistoryRow> for HistoryRecord {
    fn from(row: HistoryRow) -> Self {
        Self {
            passenger_id: row.passenger_id,
            norm_row: row.norm_row,
            norm_col: row.norm_col,
            feedback_score: row.feedback_score,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl HistoryRepository for PostgresHistoryRepository {
    async fn append(&self, record: &HistoryRecord) -> Result<(), Box<dyn Error + Send + Sync>> {
        sqlx::query(
            r#"
            INSERT INTO history (passenger_id, norm_row, norm_col, feedback_score, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(&record.passenger_id)
        .bind(record.norm_row)
        .bind(record.norm_col)
        .bind(record.feedback_score)
        .bind(record.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_passenger(
        &self,
        passenger_id: &str,
    ) -> Result<Vec<HistoryRecord>, Box<dyn Error + Send + Sync>> {
        let rows = sqlx::query_as::<_, HistoryRow>(
            r#"
            SELECT passenger_id, norm_row, norm_col, feedback_score, created_at
            FROM history
            WHERE passenger_id = $1
            ORDER BY id
            "#,
        )
        .bind(passenger_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(HistoryRecord::from).collect())
    }

    async fn list_all(
        &self,
        since: Option<DateTime<Utc>>,
    ) -> Result<Vec<HistoryRecord>, Box<dyn Error + Send + Sync>> {
        let rows = sqlx::query_as::<_, HistoryRow>(
            r#"
            SELECT passenger_id, norm_row, norm_col, feedback_score, created_at
            FROM history
            WHERE $1::timestamptz IS NULL OR created_at >= $1
            ORDER BY id
            "#,
        )
        .bind(since)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(HistoryRecord::from).collect())
    }
}
