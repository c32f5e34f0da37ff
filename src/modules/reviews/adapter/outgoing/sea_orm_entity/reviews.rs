use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "reviews")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub customer_id: Uuid,
    pub vendor_id: Uuid,
    pub booking_id: Uuid,
    pub rating: i32,
    pub title: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub comment: Option<String>,
    #[sea_orm(column_type = "JsonBinary")]
    pub images: Json,
    pub service_category: Option<String>,
    #[sea_orm(column_type = "JsonBinary")]
    pub pros: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub cons: Json,
    pub would_recommend: Option<bool>,
    pub quality_rating: Option<i32>,
    pub value_rating: Option<i32>,
    pub communication_rating: Option<i32>,
    pub timeliness_rating: Option<i32>,
    pub helpful_count: i32,
    pub not_helpful_count: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub vendor_response: Option<String>,
    pub vendor_response_at: Option<DateTimeWithTimeZone>,
    pub is_verified: bool,
    pub is_published: bool,
    pub published_at: Option<DateTimeWithTimeZone>,
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
