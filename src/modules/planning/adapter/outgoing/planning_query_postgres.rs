use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::plannings::{Column, Entity as PlanningEntity, Model as PlanningModel};
use crate::modules::planning::application::domain::{Planning, PlanningProgress};
use crate::modules::planning::application::ports::outgoing::{PlanningQuery, PlanningQueryError};
use crate::shared::db::from_json;

pub(crate) fn planning_from_model(model: PlanningModel) -> Result<Planning, String> {
    Ok(Planning {
        colors: from_json(&model.colors)?,
        budget_items: from_json(&model.budget_items)?,
        guests: from_json(&model.guests)?,
        timeline: from_json(&model.timeline)?,
        checklist: from_json(&model.checklist)?,
        progress: PlanningProgress {
            budget: model.budget_progress,
            guests: model.guests_progress,
            timeline: model.timeline_progress,
            checklist: model.checklist_progress,
        },
        id: model.id,
        user_id: model.user_id,
        wedding_date: model.wedding_date,
        venue: model.venue,
        guest_count: model.guest_count,
        budget: model.budget,
        style: model.style,
        theme: model.theme,
        notes: model.notes,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    })
}

#[derive(Clone, Debug)]
pub struct PlanningQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PlanningQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PlanningQuery for PlanningQueryPostgres {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<Planning>, PlanningQueryError> {
        PlanningEntity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::IsActive.eq(true))
            .one(&*self.db)
            .await
            .map_err(|e| PlanningQueryError::DatabaseError(e.to_string()))?
            .map(planning_from_model)
            .transpose()
            .map_err(PlanningQueryError::DatabaseError)
    }
}
