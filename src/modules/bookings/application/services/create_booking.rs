use async_trait::async_trait;
use tracing::info;

use crate::modules::auth::application::domain::entities::Actor;
use crate::modules::bookings::application::domain::{Booking, BookingRequest, NewBooking};
use crate::modules::bookings::application::ports::incoming::use_cases::{
    BookingError, CreateBookingUseCase,
};
use crate::modules::bookings::application::ports::outgoing::BookingRepository;
use crate::modules::vendors::application::ports::outgoing::VendorLookup;

pub struct CreateBookingService<R, L>
where
    R: BookingRepository,
    L: VendorLookup,
{
    repository: R,
    vendors: L,
}

impl<R, L> CreateBookingService<R, L>
where
    R: BookingRepository,
    L: VendorLookup,
{
    pub fn new(repository: R, vendors: L) -> Self {
        Self {
            repository,
            vendors,
        }
    }
}

#[async_trait]
impl<R, L> CreateBookingUseCase for CreateBookingService<R, L>
where
    R: BookingRepository + Send + Sync,
    L: VendorLookup + Send + Sync,
{
    async fn execute(&self, actor: Actor, request: BookingRequest) -> Result<Booking, BookingError> {
        let new_booking = NewBooking::from_request(actor.user_id.value(), request)
            .map_err(BookingError::Validation)?;

        self.vendors
            .find_active(new_booking.vendor_id)
            .await
            .map_err(|e| BookingError::Repository(e.to_string()))?
            .ok_or(BookingError::VendorNotFound)?;

        let booking = self
            .repository
            .create(new_booking)
            .await
            .map_err(|e| BookingError::Repository(e.to_string()))?;

        info!(
            booking_id = %booking.id,
            vendor_id = %booking.vendor_id,
            customer_id = %booking.customer_id,
            "Booking created"
        );
        Ok(booking)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::entities::Role;
    use crate::modules::bookings::application::domain::{BookingStatus, PaymentStatus};
    use crate::modules::bookings::application::services::test_support::InMemoryBookings;
    use crate::tests::support::stubs::StubVendorLookup;
    use chrono::NaiveDate;
    use std::sync::Arc;
    use uuid::Uuid;

    fn request(vendor_id: Uuid) -> BookingRequest {
        BookingRequest {
            vendor_id,
            service_name: "Full day photography".into(),
            service_category: "photography".into(),
            booking_date: NaiveDate::from_ymd_opt(2027, 2, 14).unwrap(),
            end_date: None,
            start_time: None,
            end_time: None,
            venue: None,
            guest_count: None,
            total_amount: 80_000.0,
            currency: None,
            special_requirements: None,
            notes: None,
            packages: vec![],
        }
    }

    #[tokio::test]
    async fn creates_pending_booking_for_caller() {
        let vendor_id = Uuid::new_v4();
        let customer = Uuid::new_v4();
        let store = Arc::new(InMemoryBookings::default());
        let service = CreateBookingService::new(
            store.clone(),
            StubVendorLookup::owned(vendor_id, Uuid::new_v4()),
        );

        let booking = service
            .execute(Actor::new(customer, Role::Customer), request(vendor_id))
            .await
            .unwrap();

        assert_eq!(booking.customer_id, customer);
        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.payment_status, PaymentStatus::Pending);
        assert_eq!(booking.remaining_amount, 80_000.0);
        assert!(store.get(booking.id).is_some());
    }

    #[tokio::test]
    async fn unknown_vendor() {
        let store = Arc::new(InMemoryBookings::default());
        let service = CreateBookingService::new(store.clone(), StubVendorLookup::default());

        let err = service
            .execute(
                Actor::new(Uuid::new_v4(), Role::Customer),
                request(Uuid::new_v4()),
            )
            .await
            .unwrap_err();

        assert_eq!(err, BookingError::VendorNotFound);
        assert!(store.rows.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn invalid_request() {
        let vendor_id = Uuid::new_v4();
        let service = CreateBookingService::new(
            Arc::new(InMemoryBookings::default()),
            StubVendorLookup::owned(vendor_id, Uuid::new_v4()),
        );
        let mut bad = request(vendor_id);
        bad.service_name = "  ".into();

        assert!(matches!(
            service
                .execute(Actor::new(Uuid::new_v4(), Role::Customer), bad)
                .await,
            Err(BookingError::Validation(_))
        ));
    }
}
