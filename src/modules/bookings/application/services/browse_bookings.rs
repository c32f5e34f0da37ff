use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use super::{caller_scope, visible_booking};
use crate::modules::auth::application::domain::entities::Actor;
use crate::modules::bookings::application::domain::{
    Booking, BookingFilter, BookingSort, BookingStats,
};
use crate::modules::bookings::application::ports::incoming::use_cases::{
    BookingError, BookingStatsUseCase, GetBookingUseCase, ListBookingsUseCase,
    UpcomingBookingsUseCase,
};
use crate::modules::bookings::application::ports::outgoing::BookingQuery;
use crate::modules::vendors::application::ports::outgoing::VendorLookup;
use crate::shared::pagination::{PageRequest, PageResult};

fn query_error(e: impl ToString) -> BookingError {
    BookingError::Repository(e.to_string())
}

// ============================================================================
// List
// ============================================================================

pub struct ListBookingsService<Q, L>
where
    Q: BookingQuery,
    L: VendorLookup,
{
    query: Q,
    vendors: L,
}

impl<Q, L> ListBookingsService<Q, L>
where
    Q: BookingQuery,
    L: VendorLookup,
{
    pub fn new(query: Q, vendors: L) -> Self {
        Self { query, vendors }
    }
}

#[async_trait]
impl<Q, L> ListBookingsUseCase for ListBookingsService<Q, L>
where
    Q: BookingQuery + Send + Sync,
    L: VendorLookup + Send + Sync,
{
    async fn execute(
        &self,
        actor: Actor,
        filter: BookingFilter,
        sort: BookingSort,
        page: PageRequest,
    ) -> Result<PageResult<Booking>, BookingError> {
        if let (Some(start), Some(end)) = (filter.start_date, filter.end_date) {
            if start > end {
                return Err(BookingError::Validation(
                    "start_date cannot be after end_date".into(),
                ));
            }
        }

        let scope = caller_scope(&self.vendors, actor)
            .await?
            .ok_or(BookingError::VendorNotFound)?;

        self.query
            .list(scope, filter, sort, page)
            .await
            .map_err(query_error)
    }
}

// ============================================================================
// Get
// ============================================================================

pub struct GetBookingService<Q, L>
where
    Q: BookingQuery,
    L: VendorLookup,
{
    query: Q,
    vendors: L,
}

impl<Q, L> GetBookingService<Q, L>
where
    Q: BookingQuery,
    L: VendorLookup,
{
    pub fn new(query: Q, vendors: L) -> Self {
        Self { query, vendors }
    }
}

#[async_trait]
impl<Q, L> GetBookingUseCase for GetBookingService<Q, L>
where
    Q: BookingQuery + Send + Sync,
    L: VendorLookup + Send + Sync,
{
    async fn execute(&self, actor: Actor, booking_id: Uuid) -> Result<Booking, BookingError> {
        visible_booking(&self.query, &self.vendors, actor, booking_id).await
    }
}

// ============================================================================
// Stats
// ============================================================================

pub struct BookingStatsService<Q, L>
where
    Q: BookingQuery,
    L: VendorLookup,
{
    query: Q,
    vendors: L,
}

impl<Q, L> BookingStatsService<Q, L>
where
    Q: BookingQuery,
    L: VendorLookup,
{
    pub fn new(query: Q, vendors: L) -> Self {
        Self { query, vendors }
    }
}

#[async_trait]
impl<Q, L> BookingStatsUseCase for BookingStatsService<Q, L>
where
    Q: BookingQuery + Send + Sync,
    L: VendorLookup + Send + Sync,
{
    async fn execute(&self, actor: Actor) -> Result<BookingStats, BookingError> {
        let Some(scope) = caller_scope(&self.vendors, actor).await? else {
            return Ok(BookingStats::default());
        };

        let counts = self
            .query
            .status_counts(scope)
            .await
            .map_err(query_error)?;

        Ok(BookingStats::from_counts(&counts))
    }
}

// ============================================================================
// Upcoming
// ============================================================================

pub struct UpcomingBookingsService<Q, L>
where
    Q: BookingQuery,
    L: VendorLookup,
{
    query: Q,
    vendors: L,
}

impl<Q, L> UpcomingBookingsService<Q, L>
where
    Q: BookingQuery,
    L: VendorLookup,
{
    pub fn new(query: Q, vendors: L) -> Self {
        Self { query, vendors }
    }
}

#[async_trait]
impl<Q, L> UpcomingBookingsUseCase for UpcomingBookingsService<Q, L>
where
    Q: BookingQuery + Send + Sync,
    L: VendorLookup + Send + Sync,
{
    async fn execute(&self, actor: Actor, limit: u64) -> Result<Vec<Booking>, BookingError> {
        let Some(scope) = caller_scope(&self.vendors, actor).await? else {
            return Ok(vec![]);
        };

        self.query
            .upcoming(scope, Utc::now().date_naive(), limit.clamp(1, 50))
            .await
            .map_err(query_error)
    }
}
