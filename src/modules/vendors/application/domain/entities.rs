use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::validation::{is_valid_phone, non_blank};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum VendorCategory {
    Photography,
    Videos,
    Catering,
    Decoration,
    Flowers,
    Cakes,
    Cards,
    Venues,
    Music,
    Transport,
    BridalSalons,
    GroomSalons,
    Jewelry,
    Other,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum VendorStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Suspended,
}

impl VendorStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VendorStatus::Pending => "pending",
            VendorStatus::Approved => "approved",
            VendorStatus::Rejected => "rejected",
            VendorStatus::Suspended => "suspended",
        }
    }
}

impl fmt::Display for VendorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VendorStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(VendorStatus::Pending),
            "approved" => Ok(VendorStatus::Approved),
            "rejected" => Ok(VendorStatus::Rejected),
            "suspended" => Ok(VendorStatus::Suspended),
            other => Err(format!("unknown vendor status '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PriceRange {
    #[schema(example = 50000.0)]
    pub min: f64,
    #[schema(example = 250000.0)]
    pub max: f64,
    #[serde(default = "default_currency")]
    #[schema(example = "LKR")]
    pub currency: String,
}

pub fn default_currency() -> String {
    "LKR".to_string()
}

impl PriceRange {
    pub fn validate(&self) -> Result<(), String> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min < 0.0 {
            return Err("Price range must be non-negative".into());
        }
        if self.min > self.max {
            return Err("Price range minimum exceeds maximum".into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Vendor {
    pub id: Uuid,
    pub user_id: Uuid,
    pub business_name: String,
    pub business_description: Option<String>,
    pub categories: Vec<VendorCategory>,
    pub district: String,
    pub city: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub logo_url: Option<String>,
    pub cover_image_url: Option<String>,
    pub price_range: Option<PriceRange>,
    pub languages: Vec<String>,
    pub specializations: Vec<String>,
    pub experience_years: Option<i32>,
    pub team_size: Option<i32>,
    pub status: VendorStatus,
    pub is_verified: bool,
    pub is_featured: bool,
    pub featured_at: Option<DateTime<Utc>>,
    pub rating: f64,
    pub review_count: i32,
    pub view_count: i32,
    pub inquiry_count: i32,
    pub booking_count: i32,
    pub rejection_reason: Option<String>,
    pub approved_at: Option<DateTime<Utc>>,
    pub approved_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Vendor {
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }
}

/// Owner-editable profile fields, shared by creation and updates.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
pub struct VendorProfile {
    pub business_name: Option<String>,
    pub business_description: Option<String>,
    pub categories: Option<Vec<VendorCategory>>,
    pub district: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub logo_url: Option<String>,
    pub cover_image_url: Option<String>,
    pub price_range: Option<PriceRange>,
    pub languages: Option<Vec<String>>,
    pub specializations: Option<Vec<String>>,
    pub experience_years: Option<i32>,
    pub team_size: Option<i32>,
}

impl VendorProfile {
    pub fn is_empty(&self) -> bool {
        self == &VendorProfile::default()
    }

    /// Checks the fields that are present; absent fields are left untouched on update.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(name) = &self.business_name {
            if name.trim().is_empty() {
                return Err("Business name cannot be empty".into());
            }
        }
        if self.categories.as_ref().is_some_and(|c| c.is_empty()) {
            return Err("At least one category is required".into());
        }
        if let Some(district) = &self.district {
            if district.trim().is_empty() {
                return Err("District cannot be empty".into());
            }
        }
        if let Some(phone) = &self.phone {
            if !is_valid_phone(phone) {
                return Err("Invalid phone number".into());
            }
        }
        if let Some(range) = &self.price_range {
            range.validate()?;
        }
        if self.experience_years.is_some_and(|y| y < 0) {
            return Err("Experience cannot be negative".into());
        }
        if self.team_size.is_some_and(|t| t < 1) {
            return Err("Team size must be at least 1".into());
        }
        Ok(())
    }
}

/// A validated profile ready to be inserted with status `pending`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewVendor {
    pub user_id: Uuid,
    pub business_name: String,
    pub categories: Vec<VendorCategory>,
    pub district: String,
    pub profile: VendorProfile,
}

impl NewVendor {
    pub fn from_profile(user_id: Uuid, profile: VendorProfile) -> Result<Self, String> {
        profile.validate()?;

        let business_name = profile
            .business_name
            .as_deref()
            .and_then(non_blank)
            .ok_or("Business name is required")?;
        let categories = profile
            .categories
            .clone()
            .filter(|c| !c.is_empty())
            .ok_or("At least one category is required")?;
        let district = profile
            .district
            .as_deref()
            .and_then(non_blank)
            .ok_or("District is required")?;

        Ok(Self {
            user_id,
            business_name,
            categories,
            district,
            profile,
        })
    }
}

/// Minimal vendor identity other modules need for ownership and scoping checks.
#[derive(Debug, Clone, PartialEq)]
pub struct VendorRef {
    pub id: Uuid,
    pub user_id: Uuid,
    pub business_name: String,
    pub status: VendorStatus,
}
