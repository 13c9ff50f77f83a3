pub mod app_config;
pub mod booking_repo;
pub mod database;
pub mod history_repo;
pub mod memory_repo;

pub use booking_repo::PostgresBookingRepository;
pub use database::DbClient;
pub use history_repo::PostgresHistoryRepository;
pub use memory_repo::{InMemoryBookingRepository, InMemoryHistoryRepository};
