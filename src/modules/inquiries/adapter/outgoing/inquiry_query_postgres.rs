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

use super::sea_orm_entity::inquiries::{Column, Entity as InquiryEntity, Model as InquiryModel};
use crate::modules::inquiries::application::domain::{
    Inquiry, InquiryFilter, InquirySort, InquirySortField, InquiryStatus, Urgency,
};
use crate::modules::inquiries::application::ports::outgoing::{InquiryQuery, InquiryQueryError};
use crate::modules::vendors::adapter::outgoing::vendor_query_postgres::order_of;
use crate::shared::db::from_json;
use crate::shared::pagination::{PageRequest, PageResult};
use crate::shared::scope::PartyScope;

pub(crate) fn inquiry_from_model(model: InquiryModel) -> Result<Inquiry, String> {
    Ok(Inquiry {
        status: model.status.parse::<InquiryStatus>()?,
        urgency: model
            .urgency
            .as_deref()
            .map(str::parse::<Urgency>)
            .transpose()?,
        attachments: from_json(&model.attachments)?,
        messages: from_json(&model.messages)?,
        id: model.id,
        customer_id: model.customer_id,
        vendor_id: model.vendor_id,
        subject: model.subject,
        message: model.message,
        wedding_date: model.wedding_date,
        guest_count: model.guest_count,
        budget: model.budget,
        venue: model.venue,
        special_requirements: model.special_requirements,
        preferred_contact_method: model.preferred_contact_method,
        last_message_at: model.last_message_at.with_timezone(&Utc),
        closed_at: model.closed_at.map(|t| t.with_timezone(&Utc)),
        closed_by: model.closed_by,
        closed_reason: model.closed_reason,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    })
}

/// Active inquiries the scope may see.
fn scoped(scope: PartyScope) -> Select<InquiryEntity> {
    let query = InquiryEntity::find().filter(Column::IsActive.eq(true));
    match scope {
        PartyScope::All => query,
        PartyScope::Customer(id) => query.filter(Column::CustomerId.eq(id)),
        PartyScope::Vendor(id) => query.filter(Column::VendorId.eq(id)),
    }
}

fn filtered(scope: PartyScope, filter: &InquiryFilter) -> Select<InquiryEntity> {
    let mut query = scoped(scope);

    if let Some(search) = &filter.search {
        let pattern = format!("%{}%", search);
        query = query.filter(
            Condition::any()
                .add(Expr::col(Column::Subject).ilike(&pattern))
                .add(Expr::col(Column::Message).ilike(&pattern))
                .add(Expr::col(Column::SpecialRequirements).ilike(&pattern)),
        );
    }
    if let Some(status) = filter.status {
        query = query.filter(Column::Status.eq(status.as_str()));
    }

    query
}

/// Some message in the thread was sent by someone other than `reader` and is still unread.
fn has_unread_for(reader: Uuid) -> sea_orm::sea_query::SimpleExpr {
    Expr::cust_with_values(
        "EXISTS (SELECT 1 FROM jsonb_array_elements(inquiries.messages) AS m \
         WHERE m->>'sender_id' <> ? AND NOT COALESCE((m->>'is_read')::boolean, false))",
        [reader.to_string()],
    )
}

#[derive(Clone, Debug)]
pub struct InquiryQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl InquiryQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> InquiryQueryError {
    InquiryQueryError::DatabaseError(e.to_string())
}

fn to_inquiries(models: Vec<InquiryModel>) -> Result<Vec<Inquiry>, InquiryQueryError> {
    models
        .into_iter()
        .map(inquiry_from_model)
        .collect::<Result<Vec<_>, _>>()
        .map_err(InquiryQueryError::DatabaseError)
}

#[async_trait]
impl InquiryQuery for InquiryQueryPostgres {
    async fn find_by_id(&self, inquiry_id: Uuid) -> Result<Option<Inquiry>, InquiryQueryError> {
        scoped(PartyScope::All)
            .filter(Column::Id.eq(inquiry_id))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(inquiry_from_model)
            .transpose()
            .map_err(InquiryQueryError::DatabaseError)
    }

    async fn list(
        &self,
        scope: PartyScope,
        filter: InquiryFilter,
        sort: InquirySort,
        page: PageRequest,
    ) -> Result<PageResult<Inquiry>, InquiryQueryError> {
        let column = match sort.field {
            InquirySortField::LastMessageAt => Column::LastMessageAt,
            InquirySortField::CreatedAt => Column::CreatedAt,
        };

        let query = filtered(scope, &filter)
            .order_by(column, order_of(sort.order))
            .order_by_asc(Column::Id);

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let models = query
            .offset(page.offset())
            .limit(page.limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(PageResult::new(to_inquiries(models)?, page, total))
    }

    async fn unread_count(&self, scope: PartyScope, reader: Uuid) -> Result<u64, InquiryQueryError> {
        scoped(scope)
            .filter(has_unread_for(reader))
            .count(&*self.db)
            .await
            .map_err(map_db_err)
    }

    async fn recent(&self, scope: PartyScope, limit: u64) -> Result<Vec<Inquiry>, InquiryQueryError> {
        let models = scoped(scope)
            .order_by_desc(Column::LastMessageAt)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        to_inquiries(models)
    }
}
