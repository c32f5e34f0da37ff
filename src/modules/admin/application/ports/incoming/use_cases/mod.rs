pub mod content_moderation;
pub mod dashboard;
pub mod user_moderation;
pub mod vendor_moderation;

pub use content_moderation::{ListContentUseCase, SetFeaturedUseCase, UpdateContentStatusUseCase};
pub use dashboard::{AnalyticsUseCase, DashboardUseCase, RecentActivityUseCase};
pub use user_moderation::{ListUsersUseCase, UpdateUserStatusUseCase};
pub use vendor_moderation::{ListVendorsForReviewUseCase, UpdateVendorStatusUseCase};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AdminError {
    #[error("Vendor not found")]
    VendorNotFound,

    #[error("Idea not found")]
    IdeaNotFound,

    #[error("User not found")]
    UserNotFound,

    #[error("{0}")]
    Validation(String),

    #[error("Repository error: {0}")]
    Repository(String),
}
