use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "vendors")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub user_id: Uuid,
    pub business_name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub business_description: Option<String>,
    #[sea_orm(column_type = "JsonBinary")]
    pub categories: Json,
    pub district: String,
    pub city: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub logo_url: Option<String>,
    pub cover_image_url: Option<String>,
    #[sea_orm(column_type = "Double", nullable)]
    pub price_min: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub price_max: Option<f64>,
    pub price_currency: Option<String>,
    #[sea_orm(column_type = "JsonBinary")]
    pub languages: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub specializations: Json,
    pub experience_years: Option<i32>,
    pub team_size: Option<i32>,
    pub status: String,
    pub is_verified: bool,
    pub is_featured: bool,
    pub featured_at: Option<DateTimeWithTimeZone>,
    #[sea_orm(column_type = "Double")]
    pub rating: f64,
    pub review_count: i32,
    pub view_count: i32,
    pub inquiry_count: i32,
    pub booking_count: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub rejection_reason: Option<String>,
    pub approved_at: Option<DateTimeWithTimeZone>,
    pub approved_by: Option<Uuid>,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let sea_orm::ActiveValue::Set(name) = &self.business_name {
            self.business_name = sea_orm::ActiveValue::Set(name.trim().to_string());
        }

        #[cfg(feature = "no_db_triggers")]
        {
            use chrono::Utc;
            use sea_orm::ActiveValue::Set;

            if !_insert {
                self.updated_at = Set(Utc::now().into());
            }
        }

        Ok(self)
    }
}
