pub mod browse_bookings;
pub mod create_booking;
pub mod manage_booking;

pub use browse_bookings::{
    BookingStatsUseCase, GetBookingUseCase, ListBookingsUseCase, UpcomingBookingsUseCase,
};
pub use create_booking::CreateBookingUseCase;
pub use manage_booking::{DeleteBookingUseCase, UpdateBookingUseCase};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BookingError {
    #[error("Booking not found")]
    NotFound,

    #[error("Vendor not found")]
    VendorNotFound,

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    InvalidTransition(String),

    #[error("{0}")]
    Validation(String),

    #[error("Repository error: {0}")]
    Repository(String),
}
