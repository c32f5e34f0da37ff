use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "bookings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub customer_id: Uuid,
    pub vendor_id: Uuid,
    pub service_name: String,
    pub service_category: String,
    pub booking_date: Date,
    pub end_date: Option<Date>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub venue: Option<String>,
    pub guest_count: Option<i32>,
    #[sea_orm(column_type = "Double")]
    pub total_amount: f64,
    pub currency: String,
    pub status: String,
    pub payment_status: String,
    #[sea_orm(column_type = "Double")]
    pub paid_amount: f64,
    #[sea_orm(column_type = "Double")]
    pub remaining_amount: f64,
    #[sea_orm(column_type = "JsonBinary")]
    pub packages: Json,
    #[sea_orm(column_type = "Text", nullable)]
    pub special_requirements: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub cancellation_reason: Option<String>,
    pub cancelled_at: Option<DateTimeWithTimeZone>,
    pub cancelled_by: Option<Uuid>,
    pub completed_at: Option<DateTimeWithTimeZone>,
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
