use async_trait::async_trait;

use super::BookingError;
use crate::modules::auth::application::domain::entities::Actor;
use crate::modules::bookings::application::domain::{Booking, BookingRequest};

#[async_trait]
pub trait CreateBookingUseCase: Send + Sync {
    async fn execute(&self, actor: Actor, request: BookingRequest) -> Result<Booking, BookingError>;
}
