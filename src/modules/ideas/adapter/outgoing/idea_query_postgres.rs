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

use super::sea_orm_entity::ideas::{Column, Entity as IdeaEntity, Model as IdeaModel};
use crate::modules::ideas::application::domain::{
    Idea, IdeaCategory, IdeaFilter, IdeaSort, IdeaSortBy, IdeaType,
};
use crate::modules::ideas::application::ports::outgoing::{IdeaQuery, IdeaQueryError};
use crate::modules::vendors::adapter::outgoing::vendor_query_postgres::order_of;
use crate::shared::db::from_json;
use crate::shared::pagination::{PageRequest, PageResult};

pub(crate) fn idea_from_model(model: IdeaModel) -> Result<Idea, String> {
    Ok(Idea {
        idea_type: model.idea_type.parse::<IdeaType>()?,
        category: model.category.parse::<IdeaCategory>()?,
        tags: from_json(&model.tags)?,
        images: from_json(&model.images)?,
        id: model.id,
        title: model.title,
        content: model.content,
        excerpt: model.excerpt,
        featured_image: model.featured_image,
        video_url: model.video_url,
        author_id: model.author_id,
        author_name: model.author_name,
        author_role: model.author_role,
        view_count: model.view_count,
        like_count: model.like_count,
        share_count: model.share_count,
        is_published: model.is_published,
        published_at: model.published_at.map(|t| t.with_timezone(&Utc)),
        is_featured: model.is_featured,
        featured_at: model.featured_at.map(|t| t.with_timezone(&Utc)),
        reading_time: model.reading_time,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    })
}

fn has_tag(tag: &str) -> sea_orm::sea_query::SimpleExpr {
    Expr::cust_with_values("tags @> ?", [serde_json::json!([tag])])
}

pub(crate) fn published() -> Select<IdeaEntity> {
    IdeaEntity::find()
        .filter(Column::IsActive.eq(true))
        .filter(Column::IsPublished.eq(true))
}

pub(crate) fn filtered(filter: &IdeaFilter) -> Select<IdeaEntity> {
    let mut query = published();

    if let Some(search) = &filter.search {
        let pattern = format!("%{}%", search);
        query = query.filter(
            Condition::any()
                .add(Expr::col(Column::Title).ilike(&pattern))
                .add(Expr::col(Column::Content).ilike(&pattern))
                .add(Expr::col(Column::Excerpt).ilike(&pattern))
                .add(Expr::expr(Expr::cust("ideas.tags::text")).ilike(&pattern)),
        );
    }
    if let Some(idea_type) = filter.idea_type {
        query = query.filter(Column::IdeaType.eq(idea_type.as_str()));
    }
    if let Some(category) = filter.category {
        query = query.filter(Column::Category.eq(category.as_str()));
    }
    if let Some(tag) = &filter.tag {
        query = query.filter(has_tag(tag));
    }
    if let Some(featured) = filter.is_featured {
        query = query.filter(Column::IsFeatured.eq(featured));
    }

    query
}

#[derive(Clone, Debug)]
pub struct IdeaQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl IdeaQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> IdeaQueryError {
    IdeaQueryError::DatabaseError(e.to_string())
}

fn to_ideas(models: Vec<IdeaModel>) -> Result<Vec<Idea>, IdeaQueryError> {
    models
        .into_iter()
        .map(idea_from_model)
        .collect::<Result<Vec<_>, _>>()
        .map_err(IdeaQueryError::DatabaseError)
}

#[async_trait]
impl IdeaQuery for IdeaQueryPostgres {
    async fn find_by_id(&self, idea_id: Uuid) -> Result<Option<Idea>, IdeaQueryError> {
        IdeaEntity::find_by_id(idea_id)
            .filter(Column::IsActive.eq(true))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(idea_from_model)
            .transpose()
            .map_err(IdeaQueryError::DatabaseError)
    }

    async fn list(
        &self,
        filter: IdeaFilter,
        sort: IdeaSort,
        page: PageRequest,
    ) -> Result<PageResult<Idea>, IdeaQueryError> {
        let order = order_of(sort.order);
        let query = filtered(&filter);
        let query = match sort.by {
            IdeaSortBy::Latest | IdeaSortBy::Trending => query.order_by(Column::CreatedAt, order),
            IdeaSortBy::Popular => query
                .order_by(Column::ViewCount, order.clone())
                .order_by(Column::LikeCount, order),
            IdeaSortBy::Views => query.order_by(Column::ViewCount, order),
            IdeaSortBy::Likes => query.order_by(Column::LikeCount, order),
        }
        .order_by_asc(Column::Id);

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let models = query
            .offset(page.offset())
            .limit(page.limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(PageResult::new(to_ideas(models)?, page, total))
    }

    async fn all_matching(&self, filter: IdeaFilter) -> Result<Vec<Idea>, IdeaQueryError> {
        let models = filtered(&filter)
            .order_by_desc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        to_ideas(models)
    }

    async fn newest_published(&self, limit: u64) -> Result<Vec<Idea>, IdeaQueryError> {
        let models = published()
            .order_by_desc(Column::CreatedAt)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        to_ideas(models)
    }

    async fn related(&self, idea: &Idea, limit: u64) -> Result<Vec<Idea>, IdeaQueryError> {
        let mut shared = Condition::any()
            .add(Column::Category.eq(idea.category.as_str()))
            .add(Column::IdeaType.eq(idea.idea_type.as_str()));
        for tag in &idea.tags {
            shared = shared.add(has_tag(tag));
        }

        let models = published()
            .filter(Column::Id.ne(idea.id))
            .filter(shared)
            .order_by_desc(Column::ViewCount)
            .order_by_desc(Column::LikeCount)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        to_ideas(models)
    }
}
