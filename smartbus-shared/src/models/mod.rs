pub mod allocation;
pub mod booking;
pub mod feedback;
pub mod history;
pub mod training;

pub use allocation::{
    AllocationRequest, AllocationResponse, PassengerRequest, RouteRequest, SeatAssignment, Stop,
    VehicleConfig,
};
pub use booking::{Booking, BookingStored, NewBooking};
pub use feedback::{FeedbackRequest, FeedbackStored};
pub use history::{HistoryPoint, HistoryRecord};
pub use training::{SeatTypeLabel, TrainingExport, TrainingFeatures};
