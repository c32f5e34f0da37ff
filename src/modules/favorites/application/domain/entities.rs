use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::modules::vendors::application::domain::{PriceRange, Vendor, VendorCategory};
use crate::shared::validation::non_blank;

/// The vendor fields shown next to a saved favorite.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct FavoriteVendor {
    pub id: Uuid,
    pub business_name: String,
    pub business_description: Option<String>,
    pub categories: Vec<VendorCategory>,
    pub district: String,
    pub rating: f64,
    pub review_count: i32,
    pub price_range: Option<PriceRange>,
    pub logo_url: Option<String>,
}

impl From<Vendor> for FavoriteVendor {
    fn from(vendor: Vendor) -> Self {
        Self {
            id: vendor.id,
            business_name: vendor.business_name,
            business_description: vendor.business_description,
            categories: vendor.categories,
            district: vendor.district,
            rating: vendor.rating,
            review_count: vendor.review_count,
            price_range: vendor.price_range,
            logo_url: vendor.logo_url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Favorite {
    pub id: Uuid,
    pub user_id: Uuid,
    pub vendor_id: Uuid,
    pub notes: Option<String>,
    /// The user's own grouping, e.g. `photography` or `shortlist`.
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Absent once the vendor is deactivated.
    pub vendor: Option<FavoriteVendor>,
}

pub const MAX_NOTES_LEN: usize = 1000;
pub const MAX_CATEGORY_LEN: usize = 50;

fn check_lengths(notes: Option<&str>, category: Option<&str>) -> Result<(), String> {
    if notes.is_some_and(|n| n.chars().count() > MAX_NOTES_LEN) {
        return Err(format!("Notes must be at most {MAX_NOTES_LEN} characters"));
    }
    if category.is_some_and(|c| c.trim().chars().count() > MAX_CATEGORY_LEN) {
        return Err(format!("Category must be at most {MAX_CATEGORY_LEN} characters"));
    }
    Ok(())
}

/// Lowercased and trimmed so `Photography ` and `photography` group together.
pub fn normalize_category(value: &str) -> Option<String> {
    non_blank(value).map(|c| c.to_lowercase())
}

#[derive(Debug, Clone, PartialEq, Deserialize, ToSchema)]
pub struct FavoriteRequest {
    pub vendor_id: Uuid,
    pub notes: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewFavorite {
    pub user_id: Uuid,
    pub vendor_id: Uuid,
    pub notes: Option<String>,
    pub category: Option<String>,
}

impl NewFavorite {
    pub fn from_request(user_id: Uuid, req: FavoriteRequest) -> Result<Self, String> {
        check_lengths(req.notes.as_deref(), req.category.as_deref())?;
        Ok(Self {
            user_id,
            vendor_id: req.vendor_id,
            notes: req.notes.as_deref().and_then(non_blank),
            category: req.category.as_deref().and_then(normalize_category),
        })
    }
}

/// Fields present are replaced; a blank value clears the field.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
pub struct FavoriteChanges {
    pub notes: Option<String>,
    pub category: Option<String>,
}

impl FavoriteChanges {
    pub fn is_empty(&self) -> bool {
        self.notes.is_none() && self.category.is_none()
    }

    pub fn validate(&self) -> Result<(), String> {
        check_lengths(self.notes.as_deref(), self.category.as_deref())
    }
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FavoriteListQuery {
    /// Only favorites saved under this category.
    pub category: Option<String>,
}

impl FavoriteListQuery {
    pub fn category(&self) -> Option<String> {
        self.category.as_deref().and_then(normalize_category)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct FavoriteStatus {
    pub vendor_id: Uuid,
    pub is_favorited: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_favorite_drops_blank_notes_and_folds_category() {
        let new = NewFavorite::from_request(
            Uuid::new_v4(),
            FavoriteRequest {
                vendor_id: Uuid::new_v4(),
                notes: Some("   ".into()),
                category: Some(" Photography ".into()),
            },
        )
        .unwrap();

        assert_eq!(new.notes, None);
        assert_eq!(new.category.as_deref(), Some("photography"));
    }

    #[test]
    fn overlong_category_is_rejected() {
        let err = NewFavorite::from_request(
            Uuid::new_v4(),
            FavoriteRequest {
                vendor_id: Uuid::new_v4(),
                notes: None,
                category: Some("x".repeat(MAX_CATEGORY_LEN + 1)),
            },
        )
        .unwrap_err();

        assert!(err.contains("Category"));
    }

    #[test]
    fn changes_with_a_blank_field_are_not_empty() {
        assert!(FavoriteChanges::default().is_empty());
        assert!(!FavoriteChanges {
            notes: Some(String::new()),
            category: None,
        }
        .is_empty());
    }
}
