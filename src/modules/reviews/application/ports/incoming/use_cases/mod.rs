pub mod browse_reviews;
pub mod create_review;
pub mod manage_review;
pub mod review_feedback;

pub use browse_reviews::{GetReviewUseCase, ListReviewsUseCase, VendorReviewStatsUseCase};
pub use create_review::CreateReviewUseCase;
pub use manage_review::{DeleteReviewUseCase, UpdateReviewUseCase};
pub use review_feedback::{MarkReviewHelpfulUseCase, RespondToReviewUseCase};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReviewError {
    #[error("Review not found")]
    NotFound,

    #[error("Vendor not found")]
    VendorNotFound,

    #[error("Booking not found")]
    BookingNotFound,

    #[error("{0}")]
    Forbidden(String),

    #[error("Booking does not belong to this vendor")]
    BookingVendorMismatch,

    #[error("You can only review completed bookings")]
    BookingNotCompleted,

    #[error("Review already exists for this booking")]
    AlreadyExists,

    #[error("{0}")]
    InvalidRating(String),

    #[error("{0}")]
    Validation(String),

    #[error("Repository error: {0}")]
    Repository(String),
}
