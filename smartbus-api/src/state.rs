use std::sync::Arc;
use smartbus_core::allocator::SeatAllocator;
use smartbus_core::repository::{BookingRepository, HistoryRepository};

#[derive(Clone)]
pub struct AppState {
    pub history_repo: Arc<dyn HistoryRepository>,
    pub booking_repo: Arc<dyn BookingRepository>,
    pub allocator: Arc<dyn SeatAllocator>,
}
