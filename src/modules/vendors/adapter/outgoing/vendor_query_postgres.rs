use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, Order, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Select,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::vendors::{Column, Entity as VendorEntity, Model as VendorModel};
use crate::modules::vendors::application::domain::{
    default_currency, PriceRange, Vendor, VendorFilter, VendorRef, VendorSort, VendorSortField,
    VendorStatus,
};
use crate::modules::vendors::application::ports::outgoing::{
    VendorLookup, VendorLookupError, VendorQuery, VendorQueryError,
};
use crate::shared::db::from_json;
use crate::shared::pagination::{PageRequest, PageResult, SortOrder};

pub(crate) fn vendor_from_model(model: VendorModel) -> Result<Vendor, String> {
    let status = model.status.parse::<VendorStatus>()?;

    let price_range = match (model.price_min, model.price_max) {
        (Some(min), Some(max)) => Some(PriceRange {
            min,
            max,
            currency: model.price_currency.unwrap_or_else(default_currency),
        }),
        _ => None,
    };

    Ok(Vendor {
        id: model.id,
        user_id: model.user_id,
        business_name: model.business_name,
        business_description: model.business_description,
        categories: from_json(&model.categories)?,
        district: model.district,
        city: model.city,
        address: model.address,
        phone: model.phone,
        website: model.website,
        facebook: model.facebook,
        instagram: model.instagram,
        logo_url: model.logo_url,
        cover_image_url: model.cover_image_url,
        price_range,
        languages: from_json(&model.languages)?,
        specializations: from_json(&model.specializations)?,
        experience_years: model.experience_years,
        team_size: model.team_size,
        status,
        is_verified: model.is_verified,
        is_featured: model.is_featured,
        featured_at: model.featured_at.map(|t| t.with_timezone(&Utc)),
        rating: model.rating,
        review_count: model.review_count,
        view_count: model.view_count,
        inquiry_count: model.inquiry_count,
        booking_count: model.booking_count,
        rejection_reason: model.rejection_reason,
        approved_at: model.approved_at.map(|t| t.with_timezone(&Utc)),
        approved_by: model.approved_by,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    })
}

fn vendor_ref_from_model(model: VendorModel) -> Result<VendorRef, String> {
    Ok(VendorRef {
        status: model.status.parse::<VendorStatus>()?,
        id: model.id,
        user_id: model.user_id,
        business_name: model.business_name,
    })
}

pub(crate) fn order_of(order: SortOrder) -> Order {
    match order {
        SortOrder::Asc => Order::Asc,
        SortOrder::Desc => Order::Desc,
    }
}

/// Applies the listing filters; always restricted to active rows.
pub(crate) fn filtered(filter: &VendorFilter) -> Select<VendorEntity> {
    let mut query = VendorEntity::find()
        .filter(Column::IsActive.eq(true))
        .filter(Column::Status.eq(filter.effective_status().as_str()));

    if let Some(search) = &filter.search {
        let pattern = format!("%{}%", search.trim());
        query = query.filter(
            Condition::any()
                .add(Expr::col(Column::BusinessName).ilike(&pattern))
                .add(Expr::col(Column::BusinessDescription).ilike(&pattern)),
        );
    }

    if let Some(category) = filter.category {
        query = query.filter(Expr::cust_with_values(
            "categories @> ?",
            [serde_json::json!([category])],
        ));
    }

    if let Some(district) = &filter.district {
        query = query.filter(Expr::col(Column::District).ilike(district.trim()));
    }

    if let Some(city) = &filter.city {
        query = query.filter(Expr::col(Column::City).ilike(city.trim()));
    }

    if let Some(min) = filter.min_price {
        query = query.filter(Column::PriceMin.gte(min));
    }

    if let Some(max) = filter.max_price {
        query = query.filter(Column::PriceMax.lte(max));
    }

    if let Some(rating) = filter.min_rating {
        query = query.filter(Column::Rating.gte(rating));
    }

    if let Some(verified) = filter.is_verified {
        query = query.filter(Column::IsVerified.eq(verified));
    }

    if let Some(featured) = filter.is_featured {
        query = query.filter(Column::IsFeatured.eq(featured));
    }

    query
}

#[derive(Clone, Debug)]
pub struct VendorQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl VendorQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn active_model(
        &self,
        condition: Condition,
    ) -> Result<Option<VendorModel>, DbErr> {
        VendorEntity::find()
            .filter(condition)
            .filter(Column::IsActive.eq(true))
            .one(&*self.db)
            .await
    }
}

fn map_db_err(e: DbErr) -> VendorQueryError {
    VendorQueryError::DatabaseError(e.to_string())
}

fn map_model(model: Option<VendorModel>) -> Result<Option<Vendor>, VendorQueryError> {
    model
        .map(vendor_from_model)
        .transpose()
        .map_err(VendorQueryError::DatabaseError)
}

#[async_trait]
impl VendorQuery for VendorQueryPostgres {
    async fn find_by_id(&self, vendor_id: Uuid) -> Result<Option<Vendor>, VendorQueryError> {
        let model = self
            .active_model(Condition::all().add(Column::Id.eq(vendor_id)))
            .await
            .map_err(map_db_err)?;
        map_model(model)
    }

    async fn find_by_owner(&self, user_id: Uuid) -> Result<Option<Vendor>, VendorQueryError> {
        let model = self
            .active_model(Condition::all().add(Column::UserId.eq(user_id)))
            .await
            .map_err(map_db_err)?;
        map_model(model)
    }

    async fn list(
        &self,
        filter: VendorFilter,
        sort: VendorSort,
        page: PageRequest,
    ) -> Result<PageResult<Vendor>, VendorQueryError> {
        let column = match sort.field {
            VendorSortField::CreatedAt => Column::CreatedAt,
            VendorSortField::Rating => Column::Rating,
            VendorSortField::ReviewCount => Column::ReviewCount,
            VendorSortField::ViewCount => Column::ViewCount,
            VendorSortField::BusinessName => Column::BusinessName,
        };

        let query = filtered(&filter)
            .order_by(column, order_of(sort.order))
            .order_by_asc(Column::Id);

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let models = query
            .offset(page.offset())
            .limit(page.limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let items = models
            .into_iter()
            .map(vendor_from_model)
            .collect::<Result<Vec<_>, _>>()
            .map_err(VendorQueryError::DatabaseError)?;

        Ok(PageResult::new(items, page, total))
    }

    async fn featured(&self, limit: u64) -> Result<Vec<Vendor>, VendorQueryError> {
        let models = VendorEntity::find()
            .filter(Column::IsActive.eq(true))
            .filter(Column::IsFeatured.eq(true))
            .filter(Column::Status.eq(VendorStatus::Approved.as_str()))
            .order_by_desc(Column::FeaturedAt)
            .order_by_desc(Column::Rating)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        models
            .into_iter()
            .map(vendor_from_model)
            .collect::<Result<Vec<_>, _>>()
            .map_err(VendorQueryError::DatabaseError)
    }
}

#[async_trait]
impl VendorLookup for VendorQueryPostgres {
    async fn find_active(&self, vendor_id: Uuid) -> Result<Option<VendorRef>, VendorLookupError> {
        self.active_model(Condition::all().add(Column::Id.eq(vendor_id)))
            .await
            .map_err(|e| VendorLookupError::DatabaseError(e.to_string()))?
            .map(vendor_ref_from_model)
            .transpose()
            .map_err(VendorLookupError::DatabaseError)
    }

    async fn find_by_owner(&self, user_id: Uuid) -> Result<Option<VendorRef>, VendorLookupError> {
        self.active_model(Condition::all().add(Column::UserId.eq(user_id)))
            .await
            .map_err(|e| VendorLookupError::DatabaseError(e.to_string()))?
            .map(vendor_ref_from_model)
            .transpose()
            .map_err(VendorLookupError::DatabaseError)
    }
}
