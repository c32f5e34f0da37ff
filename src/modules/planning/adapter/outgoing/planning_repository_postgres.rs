use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::planning_query_postgres::planning_from_model;
use super::sea_orm_entity::plannings::{
    ActiveModel as PlanningActiveModel, Column, Entity as PlanningEntity, Model as PlanningModel,
};
use crate::modules::planning::application::domain::{NewPlanning, Planning};
use crate::modules::planning::application::ports::outgoing::{
    PlanningRepository, PlanningRepositoryError,
};
use crate::shared::db::{is_unique_violation, string_list, to_json};

#[derive(Clone, Debug)]
pub struct PlanningRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PlanningRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn to_domain(model: PlanningModel) -> Result<Planning, PlanningRepositoryError> {
        planning_from_model(model).map_err(PlanningRepositoryError::DatabaseError)
    }
}

fn map_db_err(e: DbErr) -> PlanningRepositoryError {
    PlanningRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl PlanningRepository for PlanningRepositoryPostgres {
    async fn create(&self, planning: NewPlanning) -> Result<Planning, PlanningRepositoryError> {
        let now = Utc::now().fixed_offset();
        let empty = serde_json::json!([]);
        let active = PlanningActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(planning.user_id),
            wedding_date: Set(planning.wedding_date),
            venue: Set(planning.venue),
            guest_count: Set(planning.guest_count),
            budget: Set(planning.budget),
            style: Set(planning.style),
            theme: Set(planning.theme),
            colors: Set(string_list(&planning.colors)),
            notes: Set(planning.notes),
            budget_items: Set(empty.clone()),
            guests: Set(empty.clone()),
            timeline: Set(empty.clone()),
            checklist: Set(empty),
            budget_progress: Set(0),
            guests_progress: Set(0),
            timeline_progress: Set(0),
            checklist_progress: Set(0),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = active.insert(&*self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                PlanningRepositoryError::AlreadyExists
            } else {
                map_db_err(e)
            }
        })?;

        Self::to_domain(inserted)
    }

    async fn save(&self, planning: &Planning) -> Result<Planning, PlanningRepositoryError> {
        let json = |value: Result<serde_json::Value, String>| {
            value.map_err(PlanningRepositoryError::DatabaseError)
        };

        let active = PlanningActiveModel {
            id: sea_orm::ActiveValue::Unchanged(planning.id),
            wedding_date: Set(planning.wedding_date),
            venue: Set(planning.venue.clone()),
            guest_count: Set(planning.guest_count),
            budget: Set(planning.budget),
            style: Set(planning.style.clone()),
            theme: Set(planning.theme.clone()),
            colors: Set(string_list(&planning.colors)),
            notes: Set(planning.notes.clone()),
            budget_items: Set(json(to_json(&planning.budget_items))?),
            guests: Set(json(to_json(&planning.guests))?),
            timeline: Set(json(to_json(&planning.timeline))?),
            checklist: Set(json(to_json(&planning.checklist))?),
            budget_progress: Set(planning.progress.budget),
            guests_progress: Set(planning.progress.guests),
            timeline_progress: Set(planning.progress.timeline),
            checklist_progress: Set(planning.progress.checklist),
            updated_at: Set(planning.updated_at.fixed_offset()),
            ..Default::default()
        };

        let updated = active.update(&*self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => PlanningRepositoryError::NotFound,
            other => map_db_err(other),
        })?;
        Self::to_domain(updated)
    }

    async fn soft_delete(&self, planning_id: Uuid) -> Result<(), PlanningRepositoryError> {
        let result = PlanningEntity::update_many()
            .col_expr(Column::IsActive, Expr::value(false))
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now().fixed_offset()))
            .filter(Column::Id.eq(planning_id))
            .filter(Column::IsActive.eq(true))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(PlanningRepositoryError::NotFound);
        }
        Ok(())
    }
}
