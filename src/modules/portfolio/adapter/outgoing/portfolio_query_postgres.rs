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

use super::sea_orm_entity::portfolios::{
    Column, Entity as PortfolioEntity, Model as PortfolioModel,
};
use crate::modules::portfolio::application::domain::{
    Portfolio, PortfolioFilter, PortfolioSort, PortfolioSortField,
};
use crate::modules::portfolio::application::ports::outgoing::{
    PortfolioQuery, PortfolioQueryError,
};
use crate::modules::vendors::adapter::outgoing::vendor_query_postgres::order_of;
use crate::shared::db::from_json;
use crate::shared::pagination::{PageRequest, PageResult};

pub(crate) fn portfolio_from_model(model: PortfolioModel) -> Result<Portfolio, String> {
    Ok(Portfolio {
        id: model.id,
        vendor_id: model.vendor_id,
        title: model.title,
        description: model.description,
        category: model.category,
        tags: from_json(&model.tags)?,
        items: from_json(&model.items)?,
        project_date: model.project_date,
        venue: model.venue,
        client_name: model.client_name,
        budget: model.budget,
        duration: model.duration,
        team_size: model.team_size,
        challenges: model.challenges,
        solutions: model.solutions,
        testimonials: model.testimonials,
        is_featured: model.is_featured,
        view_count: model.view_count,
        like_count: model.like_count,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    })
}

/// Active projects of `vendor_id` matching the filter.
pub(crate) fn filtered(vendor_id: Uuid, filter: &PortfolioFilter) -> Select<PortfolioEntity> {
    let mut query = PortfolioEntity::find()
        .filter(Column::IsActive.eq(true))
        .filter(Column::VendorId.eq(vendor_id));

    if let Some(search) = &filter.search {
        let pattern = format!("%{search}%");
        query = query.filter(
            Condition::any()
                .add(Expr::col(Column::Title).ilike(&pattern))
                .add(Expr::col(Column::Description).ilike(&pattern))
                .add(Expr::col(Column::ClientName).ilike(&pattern))
                .add(Expr::col(Column::Venue).ilike(&pattern)),
        );
    }

    if let Some(category) = &filter.category {
        query = query.filter(Expr::col(Column::Category).ilike(category.as_str()));
    }

    if !filter.tags.is_empty() {
        let any_tag = filter.tags.iter().fold(Condition::any(), |cond, tag| {
            cond.add(Expr::cust_with_values(
                "tags @> ?",
                [serde_json::json!([tag])],
            ))
        });
        query = query.filter(any_tag);
    }

    if let Some(featured) = filter.is_featured {
        query = query.filter(Column::IsFeatured.eq(featured));
    }

    query
}

fn map_db_err(e: DbErr) -> PortfolioQueryError {
    PortfolioQueryError::DatabaseError(e.to_string())
}

fn to_domain(models: Vec<PortfolioModel>) -> Result<Vec<Portfolio>, PortfolioQueryError> {
    models
        .into_iter()
        .map(portfolio_from_model)
        .collect::<Result<_, _>>()
        .map_err(PortfolioQueryError::DatabaseError)
}

#[derive(Clone, Debug)]
pub struct PortfolioQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PortfolioQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PortfolioQuery for PortfolioQueryPostgres {
    async fn find_by_id(&self, portfolio_id: Uuid) -> Result<Option<Portfolio>, PortfolioQueryError> {
        PortfolioEntity::find_by_id(portfolio_id)
            .filter(Column::IsActive.eq(true))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(portfolio_from_model)
            .transpose()
            .map_err(PortfolioQueryError::DatabaseError)
    }

    async fn list_for_vendor(
        &self,
        vendor_id: Uuid,
        filter: &PortfolioFilter,
        sort: PortfolioSort,
        page: PageRequest,
    ) -> Result<PageResult<Portfolio>, PortfolioQueryError> {
        let column = match sort.field {
            PortfolioSortField::CreatedAt => Column::CreatedAt,
            PortfolioSortField::ProjectDate => Column::ProjectDate,
            PortfolioSortField::ViewCount => Column::ViewCount,
            PortfolioSortField::LikeCount => Column::LikeCount,
        };

        let query = filtered(vendor_id, filter);
        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let models = query
            .order_by(column, order_of(sort.order))
            .order_by(Column::Id, order_of(sort.order))
            .offset(page.offset())
            .limit(page.limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(PageResult::new(to_domain(models)?, page, total))
    }

    async fn all_for_vendor(&self, vendor_id: Uuid) -> Result<Vec<Portfolio>, PortfolioQueryError> {
        let models = filtered(vendor_id, &PortfolioFilter::default())
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        to_domain(models)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::pagination::SortOrder;
    use crate::tests::support::fixtures::portfolio_model;
    use sea_orm::{DatabaseBackend, MockDatabase, QueryTrait, Value};
    use std::collections::BTreeMap;

    fn count_row(n: i64) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([("num_items", Value::BigInt(Some(n)))])
    }

    #[test]
    fn filter_matches_any_tag_and_searches_client_and_venue() {
        let sql = filtered(
            Uuid::new_v4(),
            &PortfolioFilter {
                search: Some("bentota".into()),
                tags: vec!["beach".into(), "sunset".into()],
                is_featured: Some(true),
                ..Default::default()
            },
        )
        .build(DatabaseBackend::Postgres)
        .to_string();

        assert!(sql.contains(r#""is_active" = TRUE"#));
        assert!(sql.contains(r#""client_name" ILIKE '%bentota%'"#));
        assert!(sql.contains(r#""venue" ILIKE '%bentota%'"#));
        assert_eq!(sql.matches("tags @>").count(), 2);
        assert!(sql.contains(" OR "));
        assert!(sql.contains(r#""is_featured" = TRUE"#));
    }

    #[tokio::test]
    async fn find_decodes_items() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![portfolio_model(id, Uuid::new_v4())]])
            .into_connection();

        let portfolio = PortfolioQueryPostgres::new(Arc::new(db))
            .find_by_id(id)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(portfolio.items.len(), 1);
        assert!(portfolio.items[0].is_primary);
        assert_eq!(portfolio.tags, ["outdoor"]);
    }

    #[tokio::test]
    async fn list_pages_with_total() {
        let vendor_id = Uuid::new_v4();
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[count_row(7)]])
                .append_query_results([vec![
                    portfolio_model(Uuid::new_v4(), vendor_id),
                    portfolio_model(Uuid::new_v4(), vendor_id),
                ]])
                .into_connection(),
        );

        let page = PortfolioQueryPostgres::new(db.clone())
            .list_for_vendor(
                vendor_id,
                &PortfolioFilter::default(),
                PortfolioSort {
                    field: PortfolioSortField::LikeCount,
                    order: SortOrder::Desc,
                },
                PageRequest::new(Some(2), Some(2)),
            )
            .await
            .unwrap();

        assert_eq!(page.total, 7);
        assert_eq!(page.items.len(), 2);

        let statements: Vec<String> = Arc::try_unwrap(db)
            .unwrap()
            .into_transaction_log()
            .iter()
            .flat_map(|t| t.statements().iter().map(|st| st.sql.clone()))
            .collect();
        assert!(statements[1].contains(r#"ORDER BY "portfolios"."like_count" DESC"#));
        assert!(statements[1].contains("OFFSET"));
    }
}
