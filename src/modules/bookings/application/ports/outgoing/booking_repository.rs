use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::bookings::application::domain::{Booking, NewBooking};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BookingRepositoryError {
    #[error("Booking not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Inserts the booking and bumps the vendor's `booking_count` in one transaction.
    async fn create(&self, booking: NewBooking) -> Result<Booking, BookingRepositoryError>;

    /// Persists the mutable fields of an already loaded booking.
    async fn save(&self, booking: &Booking) -> Result<Booking, BookingRepositoryError>;

    async fn soft_delete(&self, booking_id: Uuid) -> Result<(), BookingRepositoryError>;
}
