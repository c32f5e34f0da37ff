use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::modules::bookings::application::domain::{
    Booking, BookingFilter, BookingSort, BookingStatus,
};
use crate::shared::pagination::{PageRequest, PageResult};
use crate::shared::scope::PartyScope;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BookingQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait BookingQuery: Send + Sync {
    async fn find_by_id(&self, booking_id: Uuid) -> Result<Option<Booking>, BookingQueryError>;

    async fn list(
        &self,
        scope: PartyScope,
        filter: BookingFilter,
        sort: BookingSort,
        page: PageRequest,
    ) -> Result<PageResult<Booking>, BookingQueryError>;

    /// Active bookings per status; statuses without bookings may be omitted.
    async fn status_counts(
        &self,
        scope: PartyScope,
    ) -> Result<Vec<(BookingStatus, u64)>, BookingQueryError>;

    /// Confirmed or in-progress bookings dated `from` or later, soonest first.
    async fn upcoming(
        &self,
        scope: PartyScope,
        from: NaiveDate,
        limit: u64,
    ) -> Result<Vec<Booking>, BookingQueryError>;
}
