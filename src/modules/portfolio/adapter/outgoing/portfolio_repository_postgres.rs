use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QuerySelect, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::portfolio_query_postgres::portfolio_from_model;
use super::sea_orm_entity::portfolios::{
    ActiveModel as PortfolioActiveModel, Column, Entity as PortfolioEntity,
    Model as PortfolioModel,
};
use crate::modules::portfolio::application::domain::{NewPortfolio, Portfolio, PortfolioDetails};
use crate::modules::portfolio::application::ports::outgoing::{
    PortfolioRepository, PortfolioRepositoryError,
};
use crate::shared::db::{string_list, to_json};

#[derive(Clone, Debug)]
pub struct PortfolioRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PortfolioRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn to_domain(model: PortfolioModel) -> Result<Portfolio, PortfolioRepositoryError> {
        portfolio_from_model(model).map_err(PortfolioRepositoryError::DatabaseError)
    }
}

fn db_error(e: sea_orm::DbErr) -> PortfolioRepositoryError {
    PortfolioRepositoryError::DatabaseError(e.to_string())
}

/// Copies the present fields onto the active model.
fn apply_details(
    active: &mut PortfolioActiveModel,
    details: PortfolioDetails,
) -> Result<(), PortfolioRepositoryError> {
    if let Some(title) = details.title {
        active.title = Set(title);
    }
    if let Some(description) = details.description {
        active.description = Set(Some(description));
    }
    if let Some(category) = details.category {
        active.category = Set(Some(category));
    }
    if let Some(tags) = details.tags {
        active.tags = Set(string_list(&tags));
    }
    if let Some(items) = details.items {
        active.items = Set(to_json(&items).map_err(PortfolioRepositoryError::DatabaseError)?);
    }
    if let Some(date) = details.project_date {
        active.project_date = Set(Some(date));
    }
    if let Some(venue) = details.venue {
        active.venue = Set(Some(venue));
    }
    if let Some(client) = details.client_name {
        active.client_name = Set(Some(client));
    }
    if let Some(budget) = details.budget {
        active.budget = Set(Some(budget));
    }
    if let Some(duration) = details.duration {
        active.duration = Set(Some(duration));
    }
    if let Some(size) = details.team_size {
        active.team_size = Set(Some(size));
    }
    if let Some(challenges) = details.challenges {
        active.challenges = Set(Some(challenges));
    }
    if let Some(solutions) = details.solutions {
        active.solutions = Set(Some(solutions));
    }
    if let Some(testimonials) = details.testimonials {
        active.testimonials = Set(Some(testimonials));
    }
    if let Some(featured) = details.is_featured {
        active.is_featured = Set(featured);
    }
    Ok(())
}

#[async_trait]
impl PortfolioRepository for PortfolioRepositoryPostgres {
    async fn create(&self, portfolio: NewPortfolio) -> Result<Portfolio, PortfolioRepositoryError> {
        let now = Utc::now().fixed_offset();
        let mut active = PortfolioActiveModel {
            id: Set(Uuid::new_v4()),
            vendor_id: Set(portfolio.vendor_id),
            title: Set(portfolio.title),
            description: Set(None),
            category: Set(None),
            tags: Set(string_list(&[])),
            items: Set(string_list(&[])),
            project_date: Set(None),
            venue: Set(None),
            client_name: Set(None),
            budget: Set(None),
            duration: Set(None),
            team_size: Set(None),
            challenges: Set(None),
            solutions: Set(None),
            testimonials: Set(None),
            is_featured: Set(false),
            view_count: Set(0),
            like_count: Set(0),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
        };

        apply_details(
            &mut active,
            PortfolioDetails {
                title: None,
                ..portfolio.details
            },
        )?;

        let inserted = active.insert(&*self.db).await.map_err(db_error)?;
        Self::to_domain(inserted)
    }

    async fn update(
        &self,
        portfolio_id: Uuid,
        details: PortfolioDetails,
    ) -> Result<Portfolio, PortfolioRepositoryError> {
        let model = PortfolioEntity::find_by_id(portfolio_id)
            .filter(Column::IsActive.eq(true))
            .one(&*self.db)
            .await
            .map_err(db_error)?
            .ok_or(PortfolioRepositoryError::NotFound)?;

        let mut active: PortfolioActiveModel = model.into();
        apply_details(&mut active, details)?;
        active.updated_at = Set(Utc::now().fixed_offset());

        let updated = active.update(&*self.db).await.map_err(db_error)?;
        Self::to_domain(updated)
    }

    async fn soft_delete(&self, portfolio_id: Uuid) -> Result<(), PortfolioRepositoryError> {
        let result = PortfolioEntity::update_many()
            .col_expr(Column::IsActive, Expr::value(false))
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now().fixed_offset()))
            .filter(Column::Id.eq(portfolio_id))
            .filter(Column::IsActive.eq(true))
            .exec(&*self.db)
            .await
            .map_err(db_error)?;

        if result.rows_affected == 0 {
            return Err(PortfolioRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn increment_view_count(&self, portfolio_id: Uuid) -> Result<(), PortfolioRepositoryError> {
        PortfolioEntity::update_many()
            .col_expr(Column::ViewCount, Expr::col(Column::ViewCount).add(1))
            .filter(Column::Id.eq(portfolio_id))
            .exec(&*self.db)
            .await
            .map_err(db_error)?;
        Ok(())
    }

    async fn increment_like_count(&self, portfolio_id: Uuid) -> Result<i32, PortfolioRepositoryError> {
        let result = PortfolioEntity::update_many()
            .col_expr(Column::LikeCount, Expr::col(Column::LikeCount).add(1))
            .filter(Column::Id.eq(portfolio_id))
            .filter(Column::IsActive.eq(true))
            .exec(&*self.db)
            .await
            .map_err(db_error)?;

        if result.rows_affected == 0 {
            return Err(PortfolioRepositoryError::NotFound);
        }

        PortfolioEntity::find_by_id(portfolio_id)
            .select_only()
            .column(Column::LikeCount)
            .into_tuple::<i32>()
            .one(&*self.db)
            .await
            .map_err(db_error)?
            .ok_or(PortfolioRepositoryError::NotFound)
    }
}
