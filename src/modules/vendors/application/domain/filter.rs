use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use super::entities::{VendorCategory, VendorStatus};
use crate::shared::pagination::SortOrder;

/// Legal filters for the public vendor listing. `status` defaults to approved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VendorFilter {
    pub search: Option<String>,
    pub category: Option<VendorCategory>,
    pub district: Option<String>,
    pub city: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_rating: Option<f64>,
    pub is_verified: Option<bool>,
    pub is_featured: Option<bool>,
    pub status: Option<VendorStatus>,
}

impl VendorFilter {
    pub fn effective_status(&self) -> VendorStatus {
        self.status.unwrap_or(VendorStatus::Approved)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum VendorSortField {
    #[default]
    CreatedAt,
    Rating,
    ReviewCount,
    ViewCount,
    BusinessName,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VendorSort {
    pub field: VendorSortField,
    pub order: SortOrder,
}

/// Query string of `GET /vendors`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct VendorListQuery {
    pub search: Option<String>,
    #[param(value_type = Option<String>)]
    pub category: Option<VendorCategory>,
    pub district: Option<String>,
    pub city: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_rating: Option<f64>,
    pub is_verified: Option<bool>,
    pub is_featured: Option<bool>,
    #[param(value_type = Option<String>)]
    pub status: Option<VendorStatus>,
    #[param(value_type = Option<String>)]
    pub sort_by: Option<VendorSortField>,
    #[param(value_type = Option<String>)]
    pub sort_order: Option<SortOrder>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

impl VendorListQuery {
    pub fn filter(&self) -> VendorFilter {
        VendorFilter {
            search: self
                .search
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            category: self.category,
            district: self.district.clone(),
            city: self.city.clone(),
            min_price: self.min_price,
            max_price: self.max_price,
            min_rating: self.min_rating,
            is_verified: self.is_verified,
            is_featured: self.is_featured,
            status: self.status,
        }
    }

    pub fn sort(&self) -> VendorSort {
        VendorSort {
            field: self.sort_by.unwrap_or_default(),
            order: self.sort_order.unwrap_or_default(),
        }
    }
}
