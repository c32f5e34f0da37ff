use sea_orm::entity::prelude::*;

/// Section lists are stored as JSONB arrays next to their cached percentages.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "plannings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub wedding_date: Date,
    pub venue: Option<String>,
    pub guest_count: Option<i32>,
    #[sea_orm(column_type = "Double", nullable)]
    pub budget: Option<f64>,
    pub style: Option<String>,
    pub theme: Option<String>,
    #[sea_orm(column_type = "JsonBinary")]
    pub colors: Json,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    #[sea_orm(column_type = "JsonBinary")]
    pub budget_items: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub guests: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub timeline: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub checklist: Json,
    pub budget_progress: i32,
    pub guests_progress: i32,
    pub timeline_progress: i32,
    pub checklist_progress: i32,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    #[cfg(feature = "no_db_triggers")]
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        use chrono::Utc;
        use sea_orm::ActiveValue::Set;

        if !insert {
            self.updated_at = Set(Utc::now().into());
        }
        Ok(self)
    }
}
