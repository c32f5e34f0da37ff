use async_trait::async_trait;
use uuid::Uuid;

use super::BookingError;
use crate::modules::auth::application::domain::entities::Actor;
use crate::modules::bookings::application::domain::{Booking, BookingChanges};

#[async_trait]
pub trait UpdateBookingUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: Actor,
        booking_id: Uuid,
        changes: BookingChanges,
    ) -> Result<Booking, BookingError>;
}

#[async_trait]
pub trait DeleteBookingUseCase: Send + Sync {
    async fn execute(&self, actor: Actor, booking_id: Uuid) -> Result<(), BookingError>;
}
