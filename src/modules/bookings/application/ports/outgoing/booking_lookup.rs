use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::bookings::application::domain::BookingRef;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BookingLookupError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Booking facts the review module checks before accepting a review.
#[async_trait]
pub trait BookingLookup: Send + Sync {
    async fn find_active(&self, booking_id: Uuid) -> Result<Option<BookingRef>, BookingLookupError>;
}
