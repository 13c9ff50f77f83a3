use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;
use tracing::info;

use crate::app_config::DatabaseConfig;
use crate::{PostgresBookingRepository, PostgresHistoryRepository};

const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(3);

/// Postgres pool shared by the history and booking repositories.
#[derive(Clone)]
pub struct DbClient {
    pub pool: PgPool,
}

impl DbClient {
    /// Connects when a URL is configured, applying pending migrations if asked to.
    /// `Ok(None)` means the relay should fall back to in-memory storage.
    pub async fn from_config(config: &DatabaseConfig) -> Result<Option<Self>, sqlx::Error> {
        let Some(url) = config.url.as_deref() else {
            return Ok(None);
        };

        let db = Self::connect(url, config.max_connections).await?;
        if config.run_migrations {
            db.migrate().await?;
        }
        Ok(Some(db))
    }

    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect(url)
            .await?;
        info!("Connected to Postgres (pool of {})", max_connections);

        Ok(Self { pool })
    }

    /// Creates the `history` and `bookings` tables if they are missing.
    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("../migrations").run(&self.pool).await?;
        info!("History and booking tables are up to date");
        Ok(())
    }

    pub fn history_repository(&self) -> PostgresHistoryRepository {
        PostgresHistoryRepository::new(self.pool.clone())
    }

    pub fn booking_repository(&self) -> PostgresBookingRepository {
        PostgresBookingRepository::new(self.pool.clone())
    }
}
