use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::{Expr, SimpleExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QuerySelect, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::idea_query_postgres::idea_from_model;
use super::sea_orm_entity::ideas::{
    ActiveModel as IdeaActiveModel, Column, Entity as IdeaEntity, Model as IdeaModel,
};
use crate::modules::ideas::application::domain::{Idea, NewIdea};
use crate::modules::ideas::application::ports::outgoing::{IdeaRepository, IdeaRepositoryError};
use crate::shared::db::string_list;

#[derive(Clone, Debug)]
pub struct IdeaRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl IdeaRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn to_domain(model: IdeaModel) -> Result<Idea, IdeaRepositoryError> {
        idea_from_model(model).map_err(IdeaRepositoryError::DatabaseError)
    }

    /// Applies `value` to `column` on an active idea and reads the column back.
    async fn bump(
        &self,
        idea_id: Uuid,
        column: Column,
        value: SimpleExpr,
    ) -> Result<i32, IdeaRepositoryError> {
        let result = IdeaEntity::update_many()
            .col_expr(column, value)
            .filter(Column::Id.eq(idea_id))
            .filter(Column::IsActive.eq(true))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(IdeaRepositoryError::NotFound);
        }

        IdeaEntity::find_by_id(idea_id)
            .select_only()
            .column(column)
            .into_tuple::<i32>()
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(IdeaRepositoryError::NotFound)
    }
}

fn map_db_err(e: DbErr) -> IdeaRepositoryError {
    IdeaRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl IdeaRepository for IdeaRepositoryPostgres {
    async fn create(&self, idea: NewIdea) -> Result<Idea, IdeaRepositoryError> {
        let now = Utc::now().fixed_offset();
        let active = IdeaActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(idea.title),
            content: Set(idea.content),
            excerpt: Set(idea.excerpt),
            idea_type: Set(idea.idea_type.as_str().to_string()),
            category: Set(idea.category.as_str().to_string()),
            tags: Set(string_list(&idea.tags)),
            images: Set(string_list(&idea.images)),
            featured_image: Set(idea.featured_image),
            video_url: Set(idea.video_url),
            author_id: Set(idea.author_id),
            author_name: Set(idea.author_name),
            author_role: Set(idea.author_role),
            view_count: Set(0),
            like_count: Set(0),
            share_count: Set(0),
            is_published: Set(false),
            published_at: Set(None),
            is_featured: Set(false),
            featured_at: Set(None),
            reading_time: Set(idea.reading_time),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = active.insert(&*self.db).await.map_err(map_db_err)?;
        Self::to_domain(inserted)
    }

    async fn save(&self, idea: &Idea) -> Result<Idea, IdeaRepositoryError> {
        let active = IdeaActiveModel {
            id: sea_orm::ActiveValue::Unchanged(idea.id),
            title: Set(idea.title.clone()),
            content: Set(idea.content.clone()),
            excerpt: Set(idea.excerpt.clone()),
            idea_type: Set(idea.idea_type.as_str().to_string()),
            category: Set(idea.category.as_str().to_string()),
            tags: Set(string_list(&idea.tags)),
            images: Set(string_list(&idea.images)),
            featured_image: Set(idea.featured_image.clone()),
            video_url: Set(idea.video_url.clone()),
            author_name: Set(idea.author_name.clone()),
            is_published: Set(idea.is_published),
            published_at: Set(idea.published_at.map(|t| t.fixed_offset())),
            reading_time: Set(idea.reading_time),
            updated_at: Set(idea.updated_at.fixed_offset()),
            ..Default::default()
        };

        let updated = active.update(&*self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => IdeaRepositoryError::NotFound,
            other => map_db_err(other),
        })?;
        Self::to_domain(updated)
    }

    async fn soft_delete(&self, idea_id: Uuid) -> Result<(), IdeaRepositoryError> {
        let result = IdeaEntity::update_many()
            .col_expr(Column::IsActive, Expr::value(false))
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now().fixed_offset()))
            .filter(Column::Id.eq(idea_id))
            .filter(Column::IsActive.eq(true))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(IdeaRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn increment_views(&self, idea_id: Uuid) -> Result<(), IdeaRepositoryError> {
        IdeaEntity::update_many()
            .col_expr(Column::ViewCount, Expr::col(Column::ViewCount).add(1))
            .filter(Column::Id.eq(idea_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;
        Ok(())
    }

    async fn adjust_likes(&self, idea_id: Uuid, liked: bool) -> Result<i32, IdeaRepositoryError> {
        let value = if liked {
            Expr::col(Column::LikeCount).add(1)
        } else {
            Expr::cust("GREATEST(like_count - 1, 0)")
        };
        self.bump(idea_id, Column::LikeCount, value).await
    }

    async fn increment_shares(&self, idea_id: Uuid) -> Result<i32, IdeaRepositoryError> {
        self.bump(idea_id, Column::ShareCount, Expr::col(Column::ShareCount).add(1))
            .await
    }
}
