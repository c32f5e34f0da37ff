use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Select,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::reviews::{Column, Entity as ReviewEntity, Model as ReviewModel};
use crate::modules::reviews::application::domain::{
    Review, ReviewFilter, ReviewSort, ReviewSortField,
};
use crate::modules::reviews::application::ports::outgoing::{ReviewQuery, ReviewQueryError};
use crate::modules::vendors::adapter::outgoing::vendor_query_postgres::order_of;
use crate::shared::db::from_json;
use crate::shared::pagination::{PageRequest, PageResult};

pub(crate) fn review_from_model(model: ReviewModel) -> Result<Review, String> {
    Ok(Review {
        images: from_json(&model.images)?,
        pros: from_json(&model.pros)?,
        cons: from_json(&model.cons)?,
        id: model.id,
        customer_id: model.customer_id,
        vendor_id: model.vendor_id,
        booking_id: model.booking_id,
        rating: model.rating,
        title: model.title,
        comment: model.comment,
        service_category: model.service_category,
        would_recommend: model.would_recommend,
        quality_rating: model.quality_rating,
        value_rating: model.value_rating,
        communication_rating: model.communication_rating,
        timeliness_rating: model.timeliness_rating,
        helpful_count: model.helpful_count,
        not_helpful_count: model.not_helpful_count,
        vendor_response: model.vendor_response,
        vendor_response_at: model.vendor_response_at.map(|t| t.with_timezone(&Utc)),
        is_verified: model.is_verified,
        is_published: model.is_published,
        published_at: model.published_at.map(|t| t.with_timezone(&Utc)),
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    })
}

/// Reviews that count towards a vendor's public rating.
pub(crate) fn published() -> Select<ReviewEntity> {
    ReviewEntity::find()
        .filter(Column::IsActive.eq(true))
        .filter(Column::IsPublished.eq(true))
}

fn filtered(filter: &ReviewFilter) -> Select<ReviewEntity> {
    let mut query = published();

    if let Some(search) = &filter.search {
        let pattern = format!("%{}%", search);
        query = query.filter(
            Condition::any()
                .add(Expr::col(Column::Title).ilike(&pattern))
                .add(Expr::col(Column::Comment).ilike(&pattern))
                .add(Expr::expr(Expr::cust("reviews.pros::text")).ilike(&pattern))
                .add(Expr::expr(Expr::cust("reviews.cons::text")).ilike(&pattern)),
        );
    }
    if let Some(vendor_id) = filter.vendor_id {
        query = query.filter(Column::VendorId.eq(vendor_id));
    }
    if let Some(category) = &filter.service_category {
        query = query.filter(Column::ServiceCategory.eq(category.as_str()));
    }
    if let Some(min) = filter.min_rating {
        query = query.filter(Column::Rating.gte(min));
    }
    if let Some(max) = filter.max_rating {
        query = query.filter(Column::Rating.lte(max));
    }
    if let Some(verified) = filter.is_verified {
        query = query.filter(Column::IsVerified.eq(verified));
    }
    if let Some(has_images) = filter.has_images {
        let with_images = Expr::cust("jsonb_array_length(reviews.images) > 0");
        query = if has_images {
            query.filter(with_images)
        } else {
            query.filter(with_images.not())
        };
    }
    if let Some(recommend) = filter.would_recommend {
        query = query.filter(Column::WouldRecommend.eq(recommend));
    }

    query
}

#[derive(Clone, Debug)]
pub struct ReviewQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ReviewQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> ReviewQueryError {
    ReviewQueryError::DatabaseError(e.to_string())
}

fn to_reviews(models: Vec<ReviewModel>) -> Result<Vec<Review>, ReviewQueryError> {
    models
        .into_iter()
        .map(review_from_model)
        .collect::<Result<Vec<_>, _>>()
        .map_err(ReviewQueryError::DatabaseError)
}

#[async_trait]
impl ReviewQuery for ReviewQueryPostgres {
    async fn find_by_id(&self, review_id: Uuid) -> Result<Option<Review>, ReviewQueryError> {
        ReviewEntity::find_by_id(review_id)
            .filter(Column::IsActive.eq(true))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(review_from_model)
            .transpose()
            .map_err(ReviewQueryError::DatabaseError)
    }

    async fn list(
        &self,
        filter: ReviewFilter,
        sort: ReviewSort,
        page: PageRequest,
    ) -> Result<PageResult<Review>, ReviewQueryError> {
        let column = match sort.field {
            ReviewSortField::CreatedAt => Column::CreatedAt,
            ReviewSortField::Rating => Column::Rating,
            ReviewSortField::HelpfulCount => Column::HelpfulCount,
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

        Ok(PageResult::new(to_reviews(models)?, page, total))
    }

    async fn published_for_vendor(&self, vendor_id: Uuid) -> Result<Vec<Review>, ReviewQueryError> {
        let models = published()
            .filter(Column::VendorId.eq(vendor_id))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        to_reviews(models)
    }

    async fn exists_for(
        &self,
        customer_id: Uuid,
        vendor_id: Uuid,
        booking_id: Uuid,
    ) -> Result<bool, ReviewQueryError> {
        let count = ReviewEntity::find()
            .filter(Column::CustomerId.eq(customer_id))
            .filter(Column::VendorId.eq(vendor_id))
            .filter(Column::BookingId.eq(booking_id))
            .filter(Column::IsActive.eq(true))
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(count > 0)
    }
}
