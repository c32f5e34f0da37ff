pub mod content_moderation;
pub mod dashboard;
pub mod user_moderation;
pub mod vendor_moderation;

pub use content_moderation::{ListContentService, SetFeaturedService, UpdateContentStatusService};
pub use dashboard::{AnalyticsService, DashboardService, RecentActivityService};
pub use user_moderation::{ListUsersService, UpdateUserStatusService};
pub use vendor_moderation::{ListVendorsForReviewService, UpdateVendorStatusService};

use crate::modules::admin::application::ports::incoming::use_cases::AdminError;
use crate::modules::admin::application::ports::outgoing::ModerationRepositoryError;

fn repository_error(e: ModerationRepositoryError, not_found: AdminError) -> AdminError {
    match e {
        ModerationRepositoryError::NotFound => not_found,
        other => AdminError::Repository(other.to_string()),
    }
}
