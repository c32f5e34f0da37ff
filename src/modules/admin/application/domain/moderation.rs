use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::modules::ideas::application::domain::Idea;
use crate::modules::vendors::application::domain::{
    Vendor, VendorFilter, VendorSort, VendorSortField, VendorStatus,
};
use crate::shared::pagination::SortOrder;

fn set_featured(
    is_featured: &mut bool,
    featured_at: &mut Option<DateTime<Utc>>,
    flag: bool,
    now: DateTime<Utc>,
) {
    *is_featured = flag;
    if flag {
        *featured_at = Some(now);
    }
}

/// Body of `PUT /admin/vendors/{id}/status`.
#[derive(Debug, Clone, PartialEq, Deserialize, ToSchema)]
pub struct VendorStatusChange {
    pub status: VendorStatus,
    pub rejection_reason: Option<String>,
    pub is_verified: Option<bool>,
    pub is_featured: Option<bool>,
}

impl VendorStatusChange {
    pub fn apply(&self, vendor: &mut Vendor, admin_id: Uuid, now: DateTime<Utc>) {
        vendor.status = self.status;
        vendor.approved_by = Some(admin_id);

        match self.status {
            VendorStatus::Approved => {
                vendor.approved_at = Some(now);
                vendor.rejection_reason = None;
            }
            VendorStatus::Rejected => {
                vendor.rejection_reason = self
                    .rejection_reason
                    .as_deref()
                    .map(str::trim)
                    .filter(|r| !r.is_empty())
                    .map(str::to_string);
            }
            VendorStatus::Pending | VendorStatus::Suspended => {}
        }

        if let Some(verified) = self.is_verified {
            vendor.is_verified = verified;
        }
        if let Some(featured) = self.is_featured {
            set_featured(&mut vendor.is_featured, &mut vendor.featured_at, featured, now);
        }
        vendor.updated_at = now;
    }

    /// Only approval and rejection are announced to the vendor.
    pub fn notifies_vendor(&self) -> bool {
        matches!(self.status, VendorStatus::Approved | VendorStatus::Rejected)
    }
}

/// Body of `PUT /admin/ideas/{id}/status`.
#[derive(Debug, Clone, PartialEq, Deserialize, ToSchema)]
pub struct ContentStatusChange {
    pub is_published: bool,
    pub is_featured: Option<bool>,
}

impl ContentStatusChange {
    pub fn apply(&self, idea: &mut Idea, now: DateTime<Utc>) {
        idea.is_published = self.is_published;
        if self.is_published && idea.published_at.is_none() {
            idea.published_at = Some(now);
        }
        if let Some(featured) = self.is_featured {
            set_featured(&mut idea.is_featured, &mut idea.featured_at, featured, now);
        }
        idea.updated_at = now;
    }
}

/// Body of `PUT /admin/users/{id}/status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
pub struct UserStatusChange {
    pub is_active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FeaturedItemType {
    Vendor,
    Idea,
}

impl FeaturedItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeaturedItemType::Vendor => "vendor",
            FeaturedItemType::Idea => "idea",
        }
    }
}

/// Body of `POST /admin/featured`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
pub struct FeaturedChange {
    pub item_id: Uuid,
    pub item_type: FeaturedItemType,
    pub is_featured: bool,
}

impl FeaturedChange {
    pub fn apply_to_vendor(&self, vendor: &mut Vendor, now: DateTime<Utc>) {
        set_featured(&mut vendor.is_featured, &mut vendor.featured_at, self.is_featured, now);
        vendor.updated_at = now;
    }

    pub fn apply_to_idea(&self, idea: &mut Idea, now: DateTime<Utc>) {
        set_featured(&mut idea.is_featured, &mut idea.featured_at, self.is_featured, now);
        idea.updated_at = now;
    }
}

/// Query string of `GET /admin/vendors`. Lists any status, pending by default.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AdminVendorListQuery {
    #[param(value_type = Option<String>)]
    pub status: Option<VendorStatus>,
    pub search: Option<String>,
    pub district: Option<String>,
    pub is_verified: Option<bool>,
    pub is_featured: Option<bool>,
    #[param(value_type = Option<String>)]
    pub sort_by: Option<VendorSortField>,
    #[param(value_type = Option<String>)]
    pub sort_order: Option<SortOrder>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

impl AdminVendorListQuery {
    pub fn filter(&self) -> VendorFilter {
        VendorFilter {
            search: self
                .search
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            district: self.district.clone(),
            is_verified: self.is_verified,
            is_featured: self.is_featured,
            status: Some(self.status.unwrap_or(VendorStatus::Pending)),
            ..Default::default()
        }
    }

    pub fn sort(&self) -> VendorSort {
        VendorSort {
            field: self.sort_by.unwrap_or_default(),
            order: self.sort_order.unwrap_or_default(),
        }
    }
}
