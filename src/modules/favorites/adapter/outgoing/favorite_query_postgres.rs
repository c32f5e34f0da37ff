use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::favorites::{Column, Entity as FavoriteEntity, Model as FavoriteModel};
use crate::modules::favorites::application::domain::{Favorite, FavoriteVendor};
use crate::modules::favorites::application::ports::outgoing::{FavoriteQuery, FavoriteQueryError};
use crate::modules::vendors::adapter::outgoing::sea_orm_entity::vendors;
use crate::modules::vendors::adapter::outgoing::vendor_query_postgres::vendor_from_model;

pub(crate) fn favorite_from_model(model: FavoriteModel) -> Favorite {
    Favorite {
        id: model.id,
        user_id: model.user_id,
        vendor_id: model.vendor_id,
        notes: model.notes,
        category: model.category,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
        vendor: None,
    }
}

fn map_db_err(e: DbErr) -> FavoriteQueryError {
    FavoriteQueryError::DatabaseError(e.to_string())
}

#[derive(Clone, Debug)]
pub struct FavoriteQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl FavoriteQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Summaries of the active vendors among `vendor_ids`.
    async fn vendor_summaries(
        &self,
        vendor_ids: Vec<Uuid>,
    ) -> Result<HashMap<Uuid, FavoriteVendor>, FavoriteQueryError> {
        if vendor_ids.is_empty() {
            return Ok(HashMap::new());
        }

        vendors::Entity::find()
            .filter(vendors::Column::Id.is_in(vendor_ids))
            .filter(vendors::Column::IsActive.eq(true))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(|model| {
                vendor_from_model(model)
                    .map(|vendor| (vendor.id, FavoriteVendor::from(vendor)))
                    .map_err(FavoriteQueryError::DatabaseError)
            })
            .collect()
    }
}

#[async_trait]
impl FavoriteQuery for FavoriteQueryPostgres {
    async fn list_for_user(
        &self,
        user_id: Uuid,
        category: Option<&str>,
    ) -> Result<Vec<Favorite>, FavoriteQueryError> {
        let mut query = FavoriteEntity::find().filter(Column::UserId.eq(user_id));
        if let Some(category) = category {
            query = query.filter(Column::Category.eq(category));
        }

        let models = query
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let mut vendors = self
            .vendor_summaries(models.iter().map(|m| m.vendor_id).collect())
            .await?;

        Ok(models
            .into_iter()
            .map(|model| {
                let vendor = vendors.remove(&model.vendor_id);
                Favorite {
                    vendor,
                    ..favorite_from_model(model)
                }
            })
            .collect())
    }

    async fn find_for_user(
        &self,
        user_id: Uuid,
        favorite_id: Uuid,
    ) -> Result<Option<Favorite>, FavoriteQueryError> {
        Ok(FavoriteEntity::find_by_id(favorite_id)
            .filter(Column::UserId.eq(user_id))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(favorite_from_model))
    }

    async fn is_favorited(
        &self,
        user_id: Uuid,
        vendor_id: Uuid,
    ) -> Result<bool, FavoriteQueryError> {
        let count = FavoriteEntity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::VendorId.eq(vendor_id))
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;
        Ok(count > 0)
    }
}
