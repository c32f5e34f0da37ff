pub mod entities;
pub mod filter;
pub mod rating;

pub use entities::*;
pub use filter::{ReviewFilter, ReviewListQuery, ReviewSort, ReviewSortField};
pub use rating::{RatingDistribution, RatingSummary, VendorReviewStats};
