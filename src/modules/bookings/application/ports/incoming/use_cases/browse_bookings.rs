use async_trait::async_trait;
use uuid::Uuid;

use super::BookingError;
use crate::modules::auth::application::domain::entities::Actor;
use crate::modules::bookings::application::domain::{
    Booking, BookingFilter, BookingSort, BookingStats,
};
use crate::shared::pagination::{PageRequest, PageResult};

/// Customers see their own bookings, vendors their business's, admins all.
#[async_trait]
pub trait ListBookingsUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: Actor,
        filter: BookingFilter,
        sort: BookingSort,
        page: PageRequest,
    ) -> Result<PageResult<Booking>, BookingError>;
}

#[async_trait]
pub trait GetBookingUseCase: Send + Sync {
    async fn execute(&self, actor: Actor, booking_id: Uuid) -> Result<Booking, BookingError>;
}

#[async_trait]
pub trait BookingStatsUseCase: Send + Sync {
    async fn execute(&self, actor: Actor) -> Result<BookingStats, BookingError>;
}

#[async_trait]
pub trait UpcomingBookingsUseCase: Send + Sync {
    async fn execute(&self, actor: Actor, limit: u64) -> Result<Vec<Booking>, BookingError>;
}
