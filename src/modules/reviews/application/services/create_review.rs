use async_trait::async_trait;
use tracing::info;

use super::{query_error, repository_error};
use crate::modules::auth::application::domain::entities::Actor;
use crate::modules::bookings::application::domain::BookingStatus;
use crate::modules::bookings::application::ports::outgoing::BookingLookup;
use crate::modules::reviews::application::domain::{
    NewReview, Review, ReviewRequest, ReviewValidationError,
};
use crate::modules::reviews::application::ports::incoming::use_cases::{
    CreateReviewUseCase, ReviewError,
};
use crate::modules::reviews::application::ports::outgoing::{ReviewQuery, ReviewRepository};
use crate::modules::vendors::application::ports::outgoing::VendorLookup;

/// Accepts a review only for a completed booking the caller made with that vendor.
pub struct CreateReviewService<Q, R, V, B>
where
    Q: ReviewQuery,
    R: ReviewRepository,
    V: VendorLookup,
    B: BookingLookup,
{
    query: Q,
    repository: R,
    vendors: V,
    bookings: B,
}

impl<Q, R, V, B> CreateReviewService<Q, R, V, B>
where
    Q: ReviewQuery,
    R: ReviewRepository,
    V: VendorLookup,
    B: BookingLookup,
{
    pub fn new(query: Q, repository: R, vendors: V, bookings: B) -> Self {
        Self {
            query,
            repository,
            vendors,
            bookings,
        }
    }
}

#[async_trait]
impl<Q, R, V, B> CreateReviewUseCase for CreateReviewService<Q, R, V, B>
where
    Q: ReviewQuery + Send + Sync,
    R: ReviewRepository + Send + Sync,
    V: VendorLookup + Send + Sync,
    B: BookingLookup + Send + Sync,
{
    async fn execute(&self, actor: Actor, request: ReviewRequest) -> Result<Review, ReviewError> {
        let customer_id = actor.user_id.value();
        let review = NewReview::from_request(customer_id, request).map_err(|e| match e {
            ReviewValidationError::Rating(msg) => ReviewError::InvalidRating(msg),
            ReviewValidationError::Field(msg) => ReviewError::Validation(msg),
        })?;

        self.vendors
            .find_active(review.vendor_id)
            .await
            .map_err(query_error)?
            .ok_or(ReviewError::VendorNotFound)?;

        let booking = self
            .bookings
            .find_active(review.booking_id)
            .await
            .map_err(query_error)?
            .ok_or(ReviewError::BookingNotFound)?;

        if booking.customer_id != customer_id {
            return Err(ReviewError::Forbidden(
                "You can only review your own bookings".into(),
            ));
        }
        if booking.vendor_id != review.vendor_id {
            return Err(ReviewError::BookingVendorMismatch);
        }
        if booking.status != BookingStatus::Completed {
            return Err(ReviewError::BookingNotCompleted);
        }

        let duplicate = self
            .query
            .exists_for(customer_id, review.vendor_id, review.booking_id)
            .await
            .map_err(query_error)?;
        if duplicate {
            return Err(ReviewError::AlreadyExists);
        }

        let created = self
            .repository
            .create(review)
            .await
            .map_err(repository_error)?;

        info!(
            review_id = %created.id,
            vendor_id = %created.vendor_id,
            rating = created.rating,
            "Review created"
        );
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::entities::Role;
    use crate::modules::reviews::application::services::test_support::InMemoryReviews;
    use crate::tests::support::stubs::{StubBookingLookup, StubVendorLookup};
    use std::sync::Arc;
    use uuid::Uuid;

    struct Fixture {
        customer: Uuid,
        vendor_id: Uuid,
        booking_id: Uuid,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                customer: Uuid::new_v4(),
                vendor_id: Uuid::new_v4(),
                booking_id: Uuid::new_v4(),
            }
        }

        fn request(&self, rating: i32) -> ReviewRequest {
            ReviewRequest {
                vendor_id: self.vendor_id,
                booking_id: self.booking_id,
                rating,
                title: Some("Great".into()),
                comment: None,
                images: vec![],
                service_category: None,
                pros: vec![],
                cons: vec![],
                would_recommend: Some(true),
                quality_rating: None,
                value_rating: None,
                communication_rating: None,
                timeliness_rating: None,
            }
        }

        fn service(
            &self,
            store: &Arc<InMemoryReviews>,
            booking_customer: Uuid,
            booking_vendor: Uuid,
            status: BookingStatus,
        ) -> CreateReviewService<
            Arc<InMemoryReviews>,
            Arc<InMemoryReviews>,
            StubVendorLookup,
            StubBookingLookup,
        > {
            CreateReviewService::new(
                store.clone(),
                store.clone(),
                StubVendorLookup::owned(self.vendor_id, Uuid::new_v4()),
                StubBookingLookup::with(self.booking_id, booking_customer, booking_vendor, status),
            )
        }

        fn actor(&self) -> Actor {
            Actor::new(self.customer, Role::Customer)
        }
    }

    #[tokio::test]
    async fn creates_review_and_updates_rating() {
        let f = Fixture::new();
        let store = InMemoryReviews::with(vec![]);
        let service = f.service(&store, f.customer, f.vendor_id, BookingStatus::Completed);

        let review = service.execute(f.actor(), f.request(4)).await.unwrap();

        assert_eq!(review.rating, 4);
        let summary = store.rating_of(f.vendor_id).unwrap();
        assert_eq!(summary.average, 4.0);
        assert_eq!(summary.count, 1);
    }

    #[tokio::test]
    async fn booking_must_be_completed() {
        let f = Fixture::new();
        let store = InMemoryReviews::with(vec![]);
        let service = f.service(&store, f.customer, f.vendor_id, BookingStatus::Confirmed);

        assert_eq!(
            service.execute(f.actor(), f.request(5)).await.unwrap_err(),
            ReviewError::BookingNotCompleted
        );
    }

    #[tokio::test]
    async fn booking_must_belong_to_vendor() {
        let f = Fixture::new();
        let store = InMemoryReviews::with(vec![]);
        let service = f.service(&store, f.customer, Uuid::new_v4(), BookingStatus::Completed);

        assert_eq!(
            service.execute(f.actor(), f.request(5)).await.unwrap_err(),
            ReviewError::BookingVendorMismatch
        );
    }

    #[tokio::test]
    async fn booking_must_belong_to_caller() {
        let f = Fixture::new();
        let store = InMemoryReviews::with(vec![]);
        let service = f.service(&store, Uuid::new_v4(), f.vendor_id, BookingStatus::Completed);

        assert!(matches!(
            service.execute(f.actor(), f.request(5)).await,
            Err(ReviewError::Forbidden(_))
        ));
    }

    #[tokio::test]
    async fn one_review_per_booking() {
        let f = Fixture::new();
        let store = InMemoryReviews::with(vec![]);
        let service = f.service(&store, f.customer, f.vendor_id, BookingStatus::Completed);

        service.execute(f.actor(), f.request(5)).await.unwrap();
        assert_eq!(
            service.execute(f.actor(), f.request(3)).await.unwrap_err(),
            ReviewError::AlreadyExists
        );
    }

    #[tokio::test]
    async fn rating_out_of_range() {
        let f = Fixture::new();
        let store = InMemoryReviews::with(vec![]);
        let service = f.service(&store, f.customer, f.vendor_id, BookingStatus::Completed);

        assert!(matches!(
            service.execute(f.actor(), f.request(6)).await,
            Err(ReviewError::InvalidRating(_))
        ));
    }

    #[tokio::test]
    async fn missing_booking_and_vendor() {
        let f = Fixture::new();
        let store = InMemoryReviews::with(vec![]);

        let no_vendor = CreateReviewService::new(
            store.clone(),
            store.clone(),
            StubVendorLookup::default(),
            StubBookingLookup::default(),
        );
        assert_eq!(
            no_vendor.execute(f.actor(), f.request(5)).await.unwrap_err(),
            ReviewError::VendorNotFound
        );

        let no_booking = CreateReviewService::new(
            store.clone(),
            store.clone(),
            StubVendorLookup::owned(f.vendor_id, Uuid::new_v4()),
            StubBookingLookup::default(),
        );
        assert_eq!(
            no_booking.execute(f.actor(), f.request(5)).await.unwrap_err(),
            ReviewError::BookingNotFound
        );
    }
}
