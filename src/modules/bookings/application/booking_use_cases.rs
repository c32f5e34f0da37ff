use std::sync::Arc;

use crate::modules::bookings::application::ports::incoming::use_cases::{
    BookingStatsUseCase, CreateBookingUseCase, DeleteBookingUseCase, GetBookingUseCase,
    ListBookingsUseCase, UpcomingBookingsUseCase, UpdateBookingUseCase,
};

#[derive(Clone)]
pub struct BookingUseCases {
    pub create: Arc<dyn CreateBookingUseCase + Send + Sync>,
    pub list: Arc<dyn ListBookingsUseCase + Send + Sync>,
    pub get: Arc<dyn GetBookingUseCase + Send + Sync>,
    pub stats: Arc<dyn BookingStatsUseCase + Send + Sync>,
    pub upcoming: Arc<dyn UpcomingBookingsUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateBookingUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteBookingUseCase + Send + Sync>,
}
