use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QuerySelect, Set, TransactionTrait,
};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use super::review_query_postgres::{published, review_from_model};
use super::sea_orm_entity::reviews::{
    ActiveModel as ReviewActiveModel, Column, Entity as ReviewEntity, Model as ReviewModel,
};
use crate::modules::reviews::application::domain::{
    HelpfulCounts, NewReview, RatingSummary, Review,
};
use crate::modules::reviews::application::ports::outgoing::{
    ReviewRepository, ReviewRepositoryError,
};
use crate::modules::vendors::adapter::outgoing::sea_orm_entity::vendors::{
    Column as VendorColumn, Entity as VendorEntity,
};
use crate::shared::db::{is_unique_violation, string_list};

#[derive(Clone, Debug)]
pub struct ReviewRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ReviewRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn to_domain(model: ReviewModel) -> Result<Review, ReviewRepositoryError> {
        review_from_model(model).map_err(ReviewRepositoryError::DatabaseError)
    }
}

fn map_db_err(e: DbErr) -> ReviewRepositoryError {
    ReviewRepositoryError::DatabaseError(e.to_string())
}

fn map_update_err(e: DbErr) -> ReviewRepositoryError {
    match e {
        DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => ReviewRepositoryError::NotFound,
        other => map_db_err(other),
    }
}

/// Rewrites the vendor's `rating` and `review_count` from its published reviews.
async fn recompute_vendor_rating<C>(conn: &C, vendor_id: Uuid) -> Result<RatingSummary, DbErr>
where
    C: ConnectionTrait,
{
    let ratings: Vec<i32> = published()
        .select_only()
        .column(Column::Rating)
        .filter(Column::VendorId.eq(vendor_id))
        .into_tuple()
        .all(conn)
        .await?;

    let summary = RatingSummary::from_ratings(&ratings);

    VendorEntity::update_many()
        .col_expr(VendorColumn::Rating, Expr::value(summary.average))
        .col_expr(VendorColumn::ReviewCount, Expr::value(summary.count))
        .filter(VendorColumn::Id.eq(vendor_id))
        .exec(conn)
        .await?;

    debug!(vendor_id = %vendor_id, rating = summary.average, count = summary.count, "Vendor rating recomputed");
    Ok(summary)
}

#[async_trait]
impl ReviewRepository for ReviewRepositoryPostgres {
    async fn create(&self, review: NewReview) -> Result<Review, ReviewRepositoryError> {
        let now = Utc::now().fixed_offset();
        let active = ReviewActiveModel {
            id: Set(Uuid::new_v4()),
            customer_id: Set(review.customer_id),
            vendor_id: Set(review.vendor_id),
            booking_id: Set(review.booking_id),
            rating: Set(review.rating),
            title: Set(review.title),
            comment: Set(review.comment),
            images: Set(string_list(&review.images)),
            service_category: Set(review.service_category),
            pros: Set(string_list(&review.pros)),
            cons: Set(string_list(&review.cons)),
            would_recommend: Set(review.would_recommend),
            quality_rating: Set(review.quality_rating),
            value_rating: Set(review.value_rating),
            communication_rating: Set(review.communication_rating),
            timeliness_rating: Set(review.timeliness_rating),
            helpful_count: Set(0),
            not_helpful_count: Set(0),
            vendor_response: Set(None),
            vendor_response_at: Set(None),
            is_verified: Set(true),
            is_published: Set(true),
            published_at: Set(Some(now)),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let txn = self.db.begin().await.map_err(map_db_err)?;

        let inserted = active.insert(&txn).await.map_err(|e| {
            if is_unique_violation(&e) {
                ReviewRepositoryError::AlreadyExists
            } else {
                map_db_err(e)
            }
        })?;

        recompute_vendor_rating(&txn, inserted.vendor_id)
            .await
            .map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;

        Self::to_domain(inserted)
    }

    async fn save(&self, review: &Review) -> Result<Review, ReviewRepositoryError> {
        let active = ReviewActiveModel {
            id: sea_orm::ActiveValue::Unchanged(review.id),
            rating: Set(review.rating),
            title: Set(review.title.clone()),
            comment: Set(review.comment.clone()),
            images: Set(string_list(&review.images)),
            service_category: Set(review.service_category.clone()),
            pros: Set(string_list(&review.pros)),
            cons: Set(string_list(&review.cons)),
            would_recommend: Set(review.would_recommend),
            quality_rating: Set(review.quality_rating),
            value_rating: Set(review.value_rating),
            communication_rating: Set(review.communication_rating),
            timeliness_rating: Set(review.timeliness_rating),
            updated_at: Set(review.updated_at.fixed_offset()),
            ..Default::default()
        };

        let txn = self.db.begin().await.map_err(map_db_err)?;

        let updated = active.update(&txn).await.map_err(map_update_err)?;

        recompute_vendor_rating(&txn, updated.vendor_id)
            .await
            .map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;

        Self::to_domain(updated)
    }

    async fn soft_delete(&self, review: &Review) -> Result<(), ReviewRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let result = ReviewEntity::update_many()
            .col_expr(Column::IsActive, Expr::value(false))
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now().fixed_offset()))
            .filter(Column::Id.eq(review.id))
            .filter(Column::IsActive.eq(true))
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ReviewRepositoryError::NotFound);
        }

        recompute_vendor_rating(&txn, review.vendor_id)
            .await
            .map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;
        Ok(())
    }

    async fn set_vendor_response(
        &self,
        review_id: Uuid,
        response: String,
        at: DateTime<Utc>,
    ) -> Result<Review, ReviewRepositoryError> {
        let active = ReviewActiveModel {
            id: sea_orm::ActiveValue::Unchanged(review_id),
            vendor_response: Set(Some(response)),
            vendor_response_at: Set(Some(at.fixed_offset())),
            updated_at: Set(at.fixed_offset()),
            ..Default::default()
        };

        let updated = active.update(&*self.db).await.map_err(map_update_err)?;
        Self::to_domain(updated)
    }

    async fn record_vote(
        &self,
        review_id: Uuid,
        helpful: bool,
    ) -> Result<HelpfulCounts, ReviewRepositoryError> {
        let column = if helpful {
            Column::HelpfulCount
        } else {
            Column::NotHelpfulCount
        };

        let result = ReviewEntity::update_many()
            .col_expr(column, Expr::col(column).add(1))
            .filter(Column::Id.eq(review_id))
            .filter(Column::IsActive.eq(true))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ReviewRepositoryError::NotFound);
        }

        let (helpful_count, not_helpful_count): (i32, i32) = ReviewEntity::find_by_id(review_id)
            .select_only()
            .column(Column::HelpfulCount)
            .column(Column::NotHelpfulCount)
            .into_tuple()
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ReviewRepositoryError::NotFound)?;

        Ok(HelpfulCounts {
            helpful_count,
            not_helpful_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::reviews::application::domain::ReviewRequest;
    use crate::tests::support::fixtures::review_model;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, RuntimeErr, Statement, Value};
    use std::collections::BTreeMap;

    fn rating_row(rating: i32) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([("rating", Value::Int(Some(rating)))])
    }

    fn exec(rows_affected: u64) -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected,
        }
    }

    /// The single vendors UPDATE issued inside the adapter's transaction.
    fn vendor_rating_update(db: Arc<DatabaseConnection>) -> Statement {
        let log = Arc::try_unwrap(db).unwrap().into_transaction_log();
        let updates: Vec<Statement> = log
            .iter()
            .flat_map(|txn| txn.statements())
            .filter(|stmt| stmt.sql.starts_with(r#"UPDATE "vendors""#))
            .cloned()
            .collect();

        assert_eq!(updates.len(), 1, "expected one vendor update in {log:?}");
        assert!(
            log.iter().any(|txn| {
                let sql: Vec<&str> = txn.statements().iter().map(|s| s.sql.as_str()).collect();
                sql.first() == Some(&"BEGIN")
                    && sql.last() == Some(&"COMMIT")
                    && sql.iter().any(|s| s.starts_with(r#"UPDATE "vendors""#))
            }),
            "vendor update ran outside the review transaction: {log:?}"
        );
        updates[0].clone()
    }

    fn assert_rating_written(stmt: &Statement, vendor_id: Uuid, average: f64, count: i32) {
        assert!(stmt.sql.contains(r#""rating" = "#), "{}", stmt.sql);
        assert!(stmt.sql.contains(r#""review_count" = "#), "{}", stmt.sql);

        let values = &stmt.values.as_ref().expect("bound values").0;
        assert_eq!(values[0], Value::Double(Some(average)));
        assert_eq!(values[1], Value::Int(Some(count)));
        assert!(values.contains(&Value::from(vendor_id)));
    }

    fn new_review(vendor_id: Uuid) -> NewReview {
        NewReview::from_request(
            Uuid::new_v4(),
            ReviewRequest {
                vendor_id,
                booking_id: Uuid::new_v4(),
                rating: 5,
                title: Some("Stunning album".into()),
                comment: None,
                images: vec![],
                service_category: Some("photography".into()),
                pros: vec!["Punctual".into()],
                cons: vec![],
                would_recommend: Some(true),
                quality_rating: Some(5),
                value_rating: None,
                communication_rating: None,
                timeliness_rating: None,
            },
        )
        .unwrap()
    }

    #[tokio::test]
    async fn create_recomputes_vendor_rating() {
        let vendor_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![review_model(Uuid::new_v4(), Uuid::new_v4(), vendor_id)]])
            .append_query_results([vec![rating_row(5), rating_row(4), rating_row(3)]])
            .append_exec_results([exec(1)])
            .into_connection();

        let db = Arc::new(db);

        let review = ReviewRepositoryPostgres::new(db.clone())
            .create(new_review(vendor_id))
            .await
            .unwrap();

        assert_eq!(review.vendor_id, vendor_id);
        assert_rating_written(&vendor_rating_update(db), vendor_id, 4.0, 3);
    }

    #[tokio::test]
    async fn save_recomputes_vendor_rating() {
        let vendor_id = Uuid::new_v4();
        let mut stored = review_model(Uuid::new_v4(), Uuid::new_v4(), vendor_id);
        stored.rating = 2;
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([vec![stored.clone()]])
                .append_query_results([vec![rating_row(2), rating_row(5)]])
                .append_exec_results([exec(1)])
                .into_connection(),
        );

        let review = review_from_model(stored).unwrap();
        let saved = ReviewRepositoryPostgres::new(db.clone())
            .save(&review)
            .await
            .unwrap();

        assert_eq!(saved.rating, 2);
        assert_rating_written(&vendor_rating_update(db), vendor_id, 3.5, 2);
    }

    #[tokio::test]
    async fn deleting_the_only_review_resets_vendor_rating() {
        let vendor_id = Uuid::new_v4();
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_exec_results([exec(1), exec(1)])
                .append_query_results([Vec::<BTreeMap<&str, Value>>::new()])
                .into_connection(),
        );
        let review =
            review_from_model(review_model(Uuid::new_v4(), Uuid::new_v4(), vendor_id)).unwrap();

        ReviewRepositoryPostgres::new(db.clone())
            .soft_delete(&review)
            .await
            .unwrap();

        assert_rating_written(&vendor_rating_update(db), vendor_id, 0.0, 0);
    }

    #[tokio::test]
    async fn duplicate_insert_is_already_exists() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Query(RuntimeErr::Internal(
                "duplicate key value violates unique constraint \"idx_reviews_unique_booking\""
                    .into(),
            ))])
            .into_connection();

        assert_eq!(
            ReviewRepositoryPostgres::new(Arc::new(db))
                .create(new_review(Uuid::new_v4()))
                .await
                .unwrap_err(),
            ReviewRepositoryError::AlreadyExists
        );
    }

    #[tokio::test]
    async fn recompute_of_empty_vendor_is_zero() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<BTreeMap<&str, Value>>::new()])
            .append_exec_results([exec(1)])
            .into_connection();

        let summary = recompute_vendor_rating(&db, Uuid::new_v4()).await.unwrap();

        assert_eq!(summary.average, 0.0);
        assert_eq!(summary.count, 0);
    }

    #[tokio::test]
    async fn recompute_rounds_average() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![rating_row(5), rating_row(4), rating_row(4)]])
            .append_exec_results([exec(1)])
            .into_connection();

        let summary = recompute_vendor_rating(&db, Uuid::new_v4()).await.unwrap();

        assert_eq!(summary.average, 4.3);
        assert_eq!(summary.count, 3);
    }

    #[tokio::test]
    async fn soft_delete_missing_review() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec(0)])
            .into_connection();
        let review = review_from_model(review_model(
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
        ))
        .unwrap();

        assert_eq!(
            ReviewRepositoryPostgres::new(Arc::new(db))
                .soft_delete(&review)
                .await
                .unwrap_err(),
            ReviewRepositoryError::NotFound
        );
    }

    #[tokio::test]
    async fn vote_reads_back_counters() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec(1)])
            .append_query_results([vec![BTreeMap::from([
                ("helpful_count", Value::Int(Some(3))),
                ("not_helpful_count", Value::Int(Some(1))),
            ])]])
            .into_connection();

        let counts = ReviewRepositoryPostgres::new(Arc::new(db))
            .record_vote(Uuid::new_v4(), true)
            .await
            .unwrap();

        assert_eq!(
            counts,
            HelpfulCounts {
                helpful_count: 3,
                not_helpful_count: 1
            }
        );
    }
}
