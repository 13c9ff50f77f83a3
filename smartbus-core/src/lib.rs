pub mod allocator;
pub mod booking;
pub mod feedback;
pub mod repository;
pub mod seat;
pub mod training;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid seat label: {0}")]
    InvalidSeatLabel(String),
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
