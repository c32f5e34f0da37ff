use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::admin::application::domain::{
    ContentFilter, ContentSort, ContentSortField, UserListFilter, UserSort, UserSortField,
};
use crate::modules::admin::application::ports::outgoing::{
    ModerationRepository, ModerationRepositoryError,
};
use crate::modules::auth::adapter::outgoing::sea_orm_entity::users::{
    Column as UserColumn, Entity as UserEntity,
};
use crate::modules::auth::adapter::outgoing::user_query_postgres::user_from_model;
use crate::modules::auth::application::domain::entities::User;
use crate::modules::ideas::adapter::outgoing::idea_query_postgres::idea_from_model;
use crate::modules::ideas::adapter::outgoing::sea_orm_entity::ideas::{
    ActiveModel as IdeaActiveModel, Column as IdeaColumn, Entity as IdeaEntity,
};
use crate::modules::ideas::application::domain::Idea;
use crate::modules::vendors::adapter::outgoing::sea_orm_entity::vendors::{
    ActiveModel as VendorActiveModel, Column as VendorColumn, Entity as VendorEntity,
};
use crate::modules::vendors::adapter::outgoing::vendor_query_postgres::{order_of, vendor_from_model};
use crate::modules::vendors::application::domain::Vendor;
use crate::shared::pagination::{PageRequest, PageResult};

/// Every account, active or not.
fn users_matching(filter: &UserListFilter) -> Select<UserEntity> {
    let mut query = UserEntity::find();

    if let Some(search) = &filter.search {
        let pattern = format!("%{}%", search);
        query = query.filter(
            Condition::any()
                .add(Expr::col(UserColumn::Name).ilike(&pattern))
                .add(Expr::col(UserColumn::Email).ilike(&pattern)),
        );
    }
    if let Some(role) = filter.role {
        query = query.filter(UserColumn::Role.eq(role.as_str()));
    }
    if let Some(active) = filter.is_active {
        query = query.filter(UserColumn::IsActive.eq(active));
    }

    query
}

/// Active ideas in any publication state.
fn content_matching(filter: &ContentFilter) -> Select<IdeaEntity> {
    let mut query = IdeaEntity::find().filter(IdeaColumn::IsActive.eq(true));

    if let Some(search) = &filter.search {
        let pattern = format!("%{}%", search);
        query = query.filter(
            Condition::any()
                .add(Expr::col(IdeaColumn::Title).ilike(&pattern))
                .add(Expr::col(IdeaColumn::Content).ilike(&pattern))
                .add(Expr::col(IdeaColumn::Excerpt).ilike(&pattern)),
        );
    }
    if let Some(idea_type) = filter.idea_type {
        query = query.filter(IdeaColumn::IdeaType.eq(idea_type.as_str()));
    }
    if let Some(category) = filter.category {
        query = query.filter(IdeaColumn::Category.eq(category.as_str()));
    }
    if let Some(published) = filter.is_published {
        query = query.filter(IdeaColumn::IsPublished.eq(published));
    }
    if let Some(featured) = filter.is_featured {
        query = query.filter(IdeaColumn::IsFeatured.eq(featured));
    }

    query
}

#[derive(Clone, Debug)]
pub struct ModerationRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ModerationRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> ModerationRepositoryError {
    match e {
        DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => ModerationRepositoryError::NotFound,
        other => ModerationRepositoryError::DatabaseError(other.to_string()),
    }
}

#[async_trait]
impl ModerationRepository for ModerationRepositoryPostgres {
    async fn find_vendor(&self, vendor_id: Uuid) -> Result<Option<Vendor>, ModerationRepositoryError> {
        VendorEntity::find_by_id(vendor_id)
            .filter(VendorColumn::IsActive.eq(true))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(vendor_from_model)
            .transpose()
            .map_err(ModerationRepositoryError::DatabaseError)
    }

    async fn save_vendor(&self, vendor: &Vendor) -> Result<Vendor, ModerationRepositoryError> {
        let active = VendorActiveModel {
            id: Unchanged(vendor.id),
            status: Set(vendor.status.as_str().to_string()),
            is_verified: Set(vendor.is_verified),
            is_featured: Set(vendor.is_featured),
            featured_at: Set(vendor.featured_at.map(|t| t.fixed_offset())),
            rejection_reason: Set(vendor.rejection_reason.clone()),
            approved_at: Set(vendor.approved_at.map(|t| t.fixed_offset())),
            approved_by: Set(vendor.approved_by),
            updated_at: Set(vendor.updated_at.fixed_offset()),
            ..Default::default()
        };

        let updated = active.update(&*self.db).await.map_err(map_db_err)?;
        vendor_from_model(updated).map_err(ModerationRepositoryError::DatabaseError)
    }

    async fn find_idea(&self, idea_id: Uuid) -> Result<Option<Idea>, ModerationRepositoryError> {
        IdeaEntity::find_by_id(idea_id)
            .filter(IdeaColumn::IsActive.eq(true))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(idea_from_model)
            .transpose()
            .map_err(ModerationRepositoryError::DatabaseError)
    }

    async fn save_idea(&self, idea: &Idea) -> Result<Idea, ModerationRepositoryError> {
        let active = IdeaActiveModel {
            id: Unchanged(idea.id),
            is_published: Set(idea.is_published),
            published_at: Set(idea.published_at.map(|t| t.fixed_offset())),
            is_featured: Set(idea.is_featured),
            featured_at: Set(idea.featured_at.map(|t| t.fixed_offset())),
            updated_at: Set(idea.updated_at.fixed_offset()),
            ..Default::default()
        };

        let updated = active.update(&*self.db).await.map_err(map_db_err)?;
        idea_from_model(updated).map_err(ModerationRepositoryError::DatabaseError)
    }

    async fn list_users(
        &self,
        filter: &UserListFilter,
        sort: UserSort,
        page: PageRequest,
    ) -> Result<PageResult<User>, ModerationRepositoryError> {
        let column = match sort.field {
            UserSortField::CreatedAt => UserColumn::CreatedAt,
            UserSortField::Name => UserColumn::Name,
            UserSortField::Email => UserColumn::Email,
            UserSortField::LastLoginAt => UserColumn::LastLoginAt,
        };

        let query = users_matching(filter)
            .order_by(column, order_of(sort.order))
            .order_by_asc(UserColumn::Id);

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let items = query
            .offset(page.offset())
            .limit(page.limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(user_from_model)
            .collect::<Result<Vec<_>, _>>()
            .map_err(ModerationRepositoryError::DatabaseError)?;

        Ok(PageResult::new(items, page, total))
    }

    async fn list_ideas(
        &self,
        filter: &ContentFilter,
        sort: ContentSort,
        page: PageRequest,
    ) -> Result<PageResult<Idea>, ModerationRepositoryError> {
        let column = match sort.field {
            ContentSortField::CreatedAt => IdeaColumn::CreatedAt,
            ContentSortField::PublishedAt => IdeaColumn::PublishedAt,
            ContentSortField::Title => IdeaColumn::Title,
            ContentSortField::ViewCount => IdeaColumn::ViewCount,
            ContentSortField::LikeCount => IdeaColumn::LikeCount,
        };

        let query = content_matching(filter)
            .order_by(column, order_of(sort.order))
            .order_by_asc(IdeaColumn::Id);

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let items = query
            .offset(page.offset())
            .limit(page.limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(idea_from_model)
            .collect::<Result<Vec<_>, _>>()
            .map_err(ModerationRepositoryError::DatabaseError)?;

        Ok(PageResult::new(items, page, total))
    }
}
