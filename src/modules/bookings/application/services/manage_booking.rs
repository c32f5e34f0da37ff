use async_trait::async_trait;
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use super::visible_booking;
use crate::modules::auth::application::domain::entities::Actor;
use crate::modules::bookings::application::domain::{Booking, BookingChangeError, BookingChanges};
use crate::modules::bookings::application::ports::incoming::use_cases::{
    BookingError, DeleteBookingUseCase, UpdateBookingUseCase,
};
use crate::modules::bookings::application::ports::outgoing::{
    BookingQuery, BookingRepository, BookingRepositoryError,
};
use crate::modules::vendors::application::ports::outgoing::VendorLookup;

fn repository_error(e: BookingRepositoryError) -> BookingError {
    match e {
        BookingRepositoryError::NotFound => BookingError::NotFound,
        other => BookingError::Repository(other.to_string()),
    }
}

pub struct UpdateBookingService<Q, R, L>
where
    Q: BookingQuery,
    R: BookingRepository,
    L: VendorLookup,
{
    query: Q,
    repository: R,
    vendors: L,
}

impl<Q, R, L> UpdateBookingService<Q, R, L>
where
    Q: BookingQuery,
    R: BookingRepository,
    L: VendorLookup,
{
    pub fn new(query: Q, repository: R, vendors: L) -> Self {
        Self {
            query,
            repository,
            vendors,
        }
    }
}

#[async_trait]
impl<Q, R, L> UpdateBookingUseCase for UpdateBookingService<Q, R, L>
where
    Q: BookingQuery + Send + Sync,
    R: BookingRepository + Send + Sync,
    L: VendorLookup + Send + Sync,
{
    async fn execute(
        &self,
        actor: Actor,
        booking_id: Uuid,
        changes: BookingChanges,
    ) -> Result<Booking, BookingError> {
        if changes.is_empty() {
            return Err(BookingError::Validation("No fields to update".into()));
        }

        let mut booking = visible_booking(&self.query, &self.vendors, actor, booking_id).await?;
        let previous = booking.status;

        booking
            .apply(changes, actor.user_id.value(), Utc::now())
            .map_err(|e| match e {
                BookingChangeError::InvalidTransition { .. } => {
                    BookingError::InvalidTransition(e.to_string())
                }
                BookingChangeError::Invalid(msg) => BookingError::Validation(msg),
            })?;

        let saved = self
            .repository
            .save(&booking)
            .await
            .map_err(repository_error)?;

        if saved.status != previous {
            info!(
                booking_id = %saved.id,
                from = %previous,
                to = %saved.status,
                "Booking status changed"
            );
        }
        Ok(saved)
    }
}

pub struct DeleteBookingService<Q, R, L>
where
    Q: BookingQuery,
    R: BookingRepository,
    L: VendorLookup,
{
    query: Q,
    repository: R,
    vendors: L,
}

impl<Q, R, L> DeleteBookingService<Q, R, L>
where
    Q: BookingQuery,
    R: BookingRepository,
    L: VendorLookup,
{
    pub fn new(query: Q, repository: R, vendors: L) -> Self {
        Self {
            query,
            repository,
            vendors,
        }
    }
}

#[async_trait]
impl<Q, R, L> DeleteBookingUseCase for DeleteBookingService<Q, R, L>
where
    Q: BookingQuery + Send + Sync,
    R: BookingRepository + Send + Sync,
    L: VendorLookup + Send + Sync,
{
    async fn execute(&self, actor: Actor, booking_id: Uuid) -> Result<(), BookingError> {
        visible_booking(&self.query, &self.vendors, actor, booking_id).await?;

        self.repository
            .soft_delete(booking_id)
            .await
            .map_err(repository_error)?;

        info!(booking_id = %booking_id, "Booking deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::entities::Role;
    use crate::modules::bookings::application::domain::{BookingStatus, PaymentStatus};
    use crate::modules::bookings::application::services::test_support::InMemoryBookings;
    use crate::tests::support::stubs::{sample_booking, StubVendorLookup};
    use std::sync::Arc;

    fn setup() -> (Arc<InMemoryBookings>, Booking, Uuid, Uuid) {
        let vendor_owner = Uuid::new_v4();
        let vendor_id = Uuid::new_v4();
        let booking = sample_booking(Uuid::new_v4(), Uuid::new_v4(), vendor_id);
        (
            Arc::new(InMemoryBookings::with(vec![booking.clone()])),
            booking,
            vendor_owner,
            vendor_id,
        )
    }

    #[tokio::test]
    async fn vendor_confirms_booking() {
        let (store, booking, owner, vendor_id) = setup();
        let service = UpdateBookingService::new(
            store.clone(),
            store.clone(),
            StubVendorLookup::owned(vendor_id, owner),
        );

        let updated = service
            .execute(
                Actor::new(owner, Role::Vendor),
                booking.id,
                BookingChanges {
                    status: Some(BookingStatus::Confirmed),
                    paid_amount: Some(100_000.0),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.status, BookingStatus::Confirmed);
        assert_eq!(updated.payment_status, PaymentStatus::Paid);
        assert_eq!(store.get(booking.id).unwrap().0.status, BookingStatus::Confirmed);
    }

    #[tokio::test]
    async fn illegal_transition_is_rejected() {
        let (store, booking, _, _) = setup();
        let service =
            UpdateBookingService::new(store.clone(), store.clone(), StubVendorLookup::default());

        let err = service
            .execute(
                Actor::new(booking.customer_id, Role::Customer),
                booking.id,
                BookingChanges {
                    status: Some(BookingStatus::Completed),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, BookingError::InvalidTransition(_)));
        assert_eq!(store.get(booking.id).unwrap().0.status, BookingStatus::Pending);
    }

    #[tokio::test]
    async fn customer_cancels_and_is_recorded() {
        let (store, booking, _, _) = setup();
        let service =
            UpdateBookingService::new(store.clone(), store.clone(), StubVendorLookup::default());

        let updated = service
            .execute(
                Actor::new(booking.customer_id, Role::Customer),
                booking.id,
                BookingChanges {
                    status: Some(BookingStatus::Cancelled),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.cancelled_by, Some(booking.customer_id));
    }

    #[tokio::test]
    async fn other_customer_cannot_update() {
        let (store, booking, _, _) = setup();
        let service =
            UpdateBookingService::new(store.clone(), store.clone(), StubVendorLookup::default());

        assert!(matches!(
            service
                .execute(
                    Actor::new(Uuid::new_v4(), Role::Customer),
                    booking.id,
                    BookingChanges {
                        notes: Some("hi".into()),
                        ..Default::default()
                    },
                )
                .await,
            Err(BookingError::Forbidden(_))
        ));
    }

    #[tokio::test]
    async fn delete_hides_booking() {
        let (store, booking, _, _) = setup();
        let service =
            DeleteBookingService::new(store.clone(), store.clone(), StubVendorLookup::default());

        service
            .execute(Actor::new(booking.customer_id, Role::Customer), booking.id)
            .await
            .unwrap();

        assert!(!store.get(booking.id).unwrap().1);
        assert_eq!(
            service
                .execute(Actor::new(booking.customer_id, Role::Customer), booking.id)
                .await
                .unwrap_err(),
            BookingError::NotFound
        );
    }
}
