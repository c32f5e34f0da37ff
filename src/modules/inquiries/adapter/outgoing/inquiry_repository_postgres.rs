use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use super::inquiry_query_postgres::inquiry_from_model;
use super::sea_orm_entity::inquiries::{
    ActiveModel as InquiryActiveModel, Column, Entity as InquiryEntity, Model as InquiryModel,
};
use crate::modules::inquiries::application::domain::{Inquiry, InquiryStatus, NewInquiry};
use crate::modules::inquiries::application::ports::outgoing::{
    InquiryRepository, InquiryRepositoryError,
};
use crate::modules::vendors::adapter::outgoing::sea_orm_entity::vendors::{
    Column as VendorColumn, Entity as VendorEntity,
};
use crate::shared::db::{string_list, to_json};

#[derive(Clone, Debug)]
pub struct InquiryRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl InquiryRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn to_domain(model: InquiryModel) -> Result<Inquiry, InquiryRepositoryError> {
        inquiry_from_model(model).map_err(InquiryRepositoryError::DatabaseError)
    }
}

fn map_db_err(e: DbErr) -> InquiryRepositoryError {
    InquiryRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl InquiryRepository for InquiryRepositoryPostgres {
    async fn create(&self, inquiry: NewInquiry) -> Result<Inquiry, InquiryRepositoryError> {
        let now = inquiry.created_at.fixed_offset();
        let active = InquiryActiveModel {
            id: Set(Uuid::new_v4()),
            customer_id: Set(inquiry.customer_id),
            vendor_id: Set(inquiry.vendor_id),
            subject: Set(inquiry.subject),
            message: Set(inquiry.message),
            attachments: Set(string_list(&inquiry.attachments)),
            status: Set(InquiryStatus::Pending.as_str().to_string()),
            messages: Set(
                to_json(&inquiry.messages).map_err(InquiryRepositoryError::DatabaseError)?,
            ),
            wedding_date: Set(inquiry.wedding_date),
            guest_count: Set(inquiry.guest_count),
            budget: Set(inquiry.budget),
            venue: Set(inquiry.venue),
            special_requirements: Set(inquiry.special_requirements),
            preferred_contact_method: Set(inquiry.preferred_contact_method),
            urgency: Set(inquiry.urgency.map(|u| u.as_str().to_string())),
            last_message_at: Set(now),
            closed_at: Set(None),
            closed_by: Set(None),
            closed_reason: Set(None),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let txn = self.db.begin().await.map_err(map_db_err)?;

        let inserted = active.insert(&txn).await.map_err(map_db_err)?;

        VendorEntity::update_many()
            .col_expr(
                VendorColumn::InquiryCount,
                Expr::col(VendorColumn::InquiryCount).add(1),
            )
            .filter(VendorColumn::Id.eq(inserted.vendor_id))
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;

        Self::to_domain(inserted)
    }

    async fn save(&self, inquiry: &Inquiry) -> Result<Inquiry, InquiryRepositoryError> {
        let active = InquiryActiveModel {
            id: sea_orm::ActiveValue::Unchanged(inquiry.id),
            status: Set(inquiry.status.as_str().to_string()),
            messages: Set(
                to_json(&inquiry.messages).map_err(InquiryRepositoryError::DatabaseError)?,
            ),
            last_message_at: Set(inquiry.last_message_at.fixed_offset()),
            closed_at: Set(inquiry.closed_at.map(|t| t.fixed_offset())),
            closed_by: Set(inquiry.closed_by),
            closed_reason: Set(inquiry.closed_reason.clone()),
            updated_at: Set(inquiry.updated_at.fixed_offset()),
            ..Default::default()
        };

        let updated = active.update(&*self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => InquiryRepositoryError::NotFound,
            other => map_db_err(other),
        })?;

        Self::to_domain(updated)
    }

    async fn soft_delete(&self, inquiry_id: Uuid) -> Result<(), InquiryRepositoryError> {
        let result = InquiryEntity::update_many()
            .col_expr(Column::IsActive, Expr::value(false))
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now().fixed_offset()))
            .filter(Column::Id.eq(inquiry_id))
            .filter(Column::IsActive.eq(true))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(InquiryRepositoryError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::inquiries::application::domain::{InquiryRequest, MessageRequest};
    use crate::tests::support::fixtures::inquiry_model;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn new_inquiry(vendor_id: Uuid) -> NewInquiry {
        NewInquiry::from_request(
            Uuid::new_v4(),
            InquiryRequest {
                vendor_id,
                subject: "Cake tasting".into(),
                message: "Can we book a tasting?".into(),
                attachments: vec![],
                wedding_date: None,
                guest_count: None,
                budget: None,
                venue: None,
                special_requirements: None,
                preferred_contact_method: None,
                urgency: None,
            },
            Utc::now(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn create_bumps_vendor_counter_in_the_same_transaction() {
        let vendor_id = Uuid::new_v4();
        let model = inquiry_model(Uuid::new_v4(), Uuid::new_v4(), vendor_id);
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([vec![model]])
                .append_exec_results([MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                }])
                .into_connection(),
        );

        let inquiry = InquiryRepositoryPostgres::new(db.clone())
            .create(new_inquiry(vendor_id))
            .await
            .unwrap();
        assert_eq!(inquiry.vendor_id, vendor_id);

        let log = format!("{:?}", Arc::try_unwrap(db).unwrap().into_transaction_log());
        assert!(log.contains("INSERT INTO"));
        assert!(log.contains("inquiry_count"));
    }

    #[tokio::test]
    async fn save_writes_the_thread() {
        let id = Uuid::new_v4();
        let row = inquiry_model(id, Uuid::new_v4(), Uuid::new_v4());
        let mut inquiry = inquiry_from_model(row.clone()).unwrap();
        inquiry
            .add_message(
                Uuid::new_v4(),
                MessageRequest {
                    message: "Saturday works".into(),
                    attachments: vec![],
                },
                Utc::now(),
            )
            .unwrap();

        let mut stored = row;
        stored.status = "replied".into();
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([vec![stored]])
                .into_connection(),
        );

        let saved = InquiryRepositoryPostgres::new(db.clone())
            .save(&inquiry)
            .await
            .unwrap();
        assert_eq!(saved.status, InquiryStatus::Replied);

        let log = format!("{:?}", Arc::try_unwrap(db).unwrap().into_transaction_log());
        assert!(log.contains("Saturday works"));
    }

    #[tokio::test]
    async fn soft_delete_missing_inquiry() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        assert_eq!(
            InquiryRepositoryPostgres::new(Arc::new(db))
                .soft_delete(Uuid::new_v4())
                .await
                .unwrap_err(),
            InquiryRepositoryError::NotFound
        );
    }
}
