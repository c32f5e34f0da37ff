pub mod browse_bookings;
pub mod create_booking;
pub mod manage_booking;

pub use browse_bookings::{
    BookingStatsService, GetBookingService, ListBookingsService, UpcomingBookingsService,
};
pub use create_booking::CreateBookingService;
pub use manage_booking::{DeleteBookingService, UpdateBookingService};

use uuid::Uuid;

use crate::modules::auth::application::domain::entities::Actor;
use crate::modules::bookings::application::domain::Booking;
use crate::modules::bookings::application::ports::incoming::use_cases::BookingError;
use crate::modules::bookings::application::ports::outgoing::BookingQuery;
use crate::modules::vendors::application::ports::outgoing::VendorLookup;
use crate::shared::scope::PartyScope;

async fn caller_scope<L>(lookup: &L, actor: Actor) -> Result<Option<PartyScope>, BookingError>
where
    L: VendorLookup,
{
    lookup
        .scope_for(actor)
        .await
        .map_err(|e| BookingError::Repository(e.to_string()))
}

/// Loads an active booking the caller is a party to.
async fn visible_booking<Q, L>(
    query: &Q,
    lookup: &L,
    actor: Actor,
    booking_id: Uuid,
) -> Result<Booking, BookingError>
where
    Q: BookingQuery,
    L: VendorLookup,
{
    let booking = query
        .find_by_id(booking_id)
        .await
        .map_err(|e| BookingError::Repository(e.to_string()))?
        .ok_or(BookingError::NotFound)?;

    let allowed = caller_scope(lookup, actor)
        .await?
        .is_some_and(|scope| scope.allows(booking.customer_id, booking.vendor_id));
    if !allowed {
        return Err(BookingError::Forbidden(
            "You can only access your own bookings".into(),
        ));
    }

    Ok(booking)
}
