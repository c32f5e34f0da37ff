use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::vendors::{
    ActiveModel as VendorActiveModel, Column, Entity as VendorEntity, Model as VendorModel,
};
use super::vendor_query_postgres::vendor_from_model;
use crate::modules::vendors::application::domain::{
    NewVendor, Vendor, VendorProfile, VendorStatus,
};
use crate::modules::vendors::application::ports::outgoing::{
    VendorRepository, VendorRepositoryError,
};
use crate::shared::db::{is_unique_violation, string_list, to_json};

#[derive(Clone, Debug)]
pub struct VendorRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl VendorRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn to_domain(model: VendorModel) -> Result<Vendor, VendorRepositoryError> {
        vendor_from_model(model).map_err(VendorRepositoryError::DatabaseError)
    }

    async fn find_active_model(&self, vendor_id: Uuid) -> Result<VendorModel, VendorRepositoryError> {
        VendorEntity::find_by_id(vendor_id)
            .filter(Column::IsActive.eq(true))
            .one(&*self.db)
            .await
            .map_err(|e| VendorRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(VendorRepositoryError::NotFound)
    }
}

/// Copies the present profile fields onto the active model.
fn apply_profile(
    active: &mut VendorActiveModel,
    profile: VendorProfile,
) -> Result<(), VendorRepositoryError> {
    if let Some(name) = profile.business_name {
        active.business_name = Set(name);
    }
    if let Some(description) = profile.business_description {
        active.business_description = Set(Some(description));
    }
    if let Some(categories) = profile.categories {
        active.categories =
            Set(to_json(&categories).map_err(VendorRepositoryError::DatabaseError)?);
    }
    if let Some(district) = profile.district {
        active.district = Set(district.trim().to_string());
    }
    if let Some(city) = profile.city {
        active.city = Set(Some(city));
    }
    if let Some(address) = profile.address {
        active.address = Set(Some(address));
    }
    if let Some(phone) = profile.phone {
        active.phone = Set(Some(phone));
    }
    if let Some(website) = profile.website {
        active.website = Set(Some(website));
    }
    if let Some(facebook) = profile.facebook {
        active.facebook = Set(Some(facebook));
    }
    if let Some(instagram) = profile.instagram {
        active.instagram = Set(Some(instagram));
    }
    if let Some(logo) = profile.logo_url {
        active.logo_url = Set(Some(logo));
    }
    if let Some(cover) = profile.cover_image_url {
        active.cover_image_url = Set(Some(cover));
    }
    if let Some(range) = profile.price_range {
        active.price_min = Set(Some(range.min));
        active.price_max = Set(Some(range.max));
        active.price_currency = Set(Some(range.currency));
    }
    if let Some(languages) = profile.languages {
        active.languages = Set(string_list(&languages));
    }
    if let Some(specializations) = profile.specializations {
        active.specializations = Set(string_list(&specializations));
    }
    if let Some(years) = profile.experience_years {
        active.experience_years = Set(Some(years));
    }
    if let Some(size) = profile.team_size {
        active.team_size = Set(Some(size));
    }
    Ok(())
}

#[async_trait]
impl VendorRepository for VendorRepositoryPostgres {
    async fn create(&self, vendor: NewVendor) -> Result<Vendor, VendorRepositoryError> {
        let now = Utc::now().fixed_offset();
        let mut active = VendorActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(vendor.user_id),
            business_name: Set(vendor.business_name),
            business_description: Set(None),
            categories: Set(
                to_json(&vendor.categories).map_err(VendorRepositoryError::DatabaseError)?,
            ),
            district: Set(vendor.district),
            city: Set(None),
            address: Set(None),
            phone: Set(None),
            website: Set(None),
            facebook: Set(None),
            instagram: Set(None),
            logo_url: Set(None),
            cover_image_url: Set(None),
            price_min: Set(None),
            price_max: Set(None),
            price_currency: Set(None),
            languages: Set(string_list(&[])),
            specializations: Set(string_list(&[])),
            experience_years: Set(None),
            team_size: Set(None),
            status: Set(VendorStatus::Pending.as_str().to_string()),
            is_verified: Set(false),
            is_featured: Set(false),
            featured_at: Set(None),
            rating: Set(0.0),
            review_count: Set(0),
            view_count: Set(0),
            inquiry_count: Set(0),
            booking_count: Set(0),
            rejection_reason: Set(None),
            approved_at: Set(None),
            approved_by: Set(None),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let profile = VendorProfile {
            business_name: None,
            categories: None,
            district: None,
            ..vendor.profile
        };
        apply_profile(&mut active, profile)?;

        let inserted = active.insert(&*self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                return VendorRepositoryError::AlreadyExists;
            }
            VendorRepositoryError::DatabaseError(e.to_string())
        })?;

        Self::to_domain(inserted)
    }

    async fn update_profile(
        &self,
        vendor_id: Uuid,
        profile: VendorProfile,
    ) -> Result<Vendor, VendorRepositoryError> {
        let model = self.find_active_model(vendor_id).await?;

        let mut active: VendorActiveModel = model.into();
        apply_profile(&mut active, profile)?;
        active.updated_at = Set(Utc::now().fixed_offset());

        let updated = active
            .update(&*self.db)
            .await
            .map_err(|e| VendorRepositoryError::DatabaseError(e.to_string()))?;

        Self::to_domain(updated)
    }

    async fn soft_delete(&self, vendor_id: Uuid) -> Result<(), VendorRepositoryError> {
        let result = VendorEntity::update_many()
            .col_expr(Column::IsActive, Expr::value(false))
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now().fixed_offset()))
            .filter(Column::Id.eq(vendor_id))
            .filter(Column::IsActive.eq(true))
            .exec(&*self.db)
            .await
            .map_err(|e| VendorRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(VendorRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn increment_view_count(&self, vendor_id: Uuid) -> Result<(), VendorRepositoryError> {
        VendorEntity::update_many()
            .col_expr(Column::ViewCount, Expr::col(Column::ViewCount).add(1))
            .filter(Column::Id.eq(vendor_id))
            .exec(&*self.db)
            .await
            .map_err(|e| VendorRepositoryError::DatabaseError(e.to_string()))?;
        Ok(())
    }
}
