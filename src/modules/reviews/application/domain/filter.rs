use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::shared::pagination::SortOrder;

/// Filters for the public review listing; only active, published reviews are listed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewFilter {
    pub search: Option<String>,
    pub vendor_id: Option<Uuid>,
    pub service_category: Option<String>,
    pub min_rating: Option<i32>,
    pub max_rating: Option<i32>,
    pub is_verified: Option<bool>,
    pub has_images: Option<bool>,
    pub would_recommend: Option<bool>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReviewSortField {
    #[default]
    CreatedAt,
    Rating,
    HelpfulCount,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReviewSort {
    pub field: ReviewSortField,
    pub order: SortOrder,
}

/// Query string of `GET /reviews`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReviewListQuery {
    /// Matches title, comment, pros and cons.
    pub search: Option<String>,
    pub vendor_id: Option<Uuid>,
    pub service_category: Option<String>,
    pub min_rating: Option<i32>,
    pub max_rating: Option<i32>,
    pub is_verified: Option<bool>,
    pub has_images: Option<bool>,
    pub would_recommend: Option<bool>,
    #[param(value_type = Option<String>)]
    pub sort_by: Option<ReviewSortField>,
    #[param(value_type = Option<String>)]
    pub sort_order: Option<SortOrder>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

impl ReviewListQuery {
    pub fn filter(&self) -> ReviewFilter {
        ReviewFilter {
            search: self
                .search
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            vendor_id: self.vendor_id,
            service_category: self.service_category.clone(),
            min_rating: self.min_rating,
            max_rating: self.max_rating,
            is_verified: self.is_verified,
            has_images: self.has_images,
            would_recommend: self.would_recommend,
        }
    }

    pub fn sort(&self) -> ReviewSort {
        ReviewSort {
            field: self.sort_by.unwrap_or_default(),
            order: self.sort_order.unwrap_or_default(),
        }
    }
}
