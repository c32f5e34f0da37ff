use actix_web::{get, web, Responder};
use uuid::Uuid;

use super::review_error;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::reviews::application::domain::{Review, ReviewListQuery, VendorReviewStats};
use crate::modules::reviews::application::review_use_cases::ReviewUseCases;
use crate::shared::api::ApiResponse;
use crate::shared::pagination::{PageRequest, PageResult};

/// List published reviews
#[utoipa::path(
    get,
    path = "/api/v1/reviews",
    tag = "reviews",
    params(ReviewListQuery),
    responses(
        (status = 200, description = "Page of reviews", body = inline(SuccessResponse<PageResult<Review>>)),
        (status = 400, description = "Invalid filter", body = ErrorResponse),
    )
)]
#[get("/reviews")]
pub async fn list_reviews_handler(
    query: web::Query<ReviewListQuery>,
    reviews: web::Data<ReviewUseCases>,
) -> impl Responder {
    let page = PageRequest::new(query.page, query.limit);

    match reviews.list.execute(query.filter(), query.sort(), page).await {
        Ok(result) => ApiResponse::success(result),
        Err(e) => review_error(e),
    }
}

/// Rating breakdown of a vendor
#[utoipa::path(
    get,
    path = "/api/v1/reviews/vendor/{vendor_id}/stats",
    tag = "reviews",
    params(("vendor_id" = Uuid, Path, description = "Vendor id")),
    responses(
        (status = 200, description = "Review statistics", body = inline(SuccessResponse<VendorReviewStats>)),
        (status = 404, description = "Vendor not found", body = ErrorResponse),
    )
)]
#[get("/reviews/vendor/{vendor_id}/stats")]
pub async fn vendor_review_stats_handler(
    path: web::Path<Uuid>,
    reviews: web::Data<ReviewUseCases>,
) -> impl Responder {
    match reviews.vendor_stats.execute(path.into_inner()).await {
        Ok(stats) => ApiResponse::success(stats),
        Err(e) => review_error(e),
    }
}

/// Get a published review
#[utoipa::path(
    get,
    path = "/api/v1/reviews/{id}",
    tag = "reviews",
    params(("id" = Uuid, Path, description = "Review id")),
    responses(
        (status = 200, description = "Review", body = inline(SuccessResponse<Review>)),
        (status = 404, description = "Review not found", body = ErrorResponse),
    )
)]
#[get("/reviews/{id}")]
pub async fn get_review_handler(
    path: web::Path<Uuid>,
    reviews: web::Data<ReviewUseCases>,
) -> impl Responder {
    match reviews.get.execute(path.into_inner()).await {
        Ok(review) => ApiResponse::success(review),
        Err(e) => review_error(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::reviews::application::domain::{
        ReviewFilter, ReviewSort, ReviewSortField,
    };
    use crate::modules::reviews::application::ports::incoming::use_cases::{
        GetReviewUseCase, ListReviewsUseCase, ReviewError, VendorReviewStatsUseCase,
    };
    use crate::modules::reviews::adapter::incoming::web::routes::configure;
    use crate::shared::pagination::SortOrder;
    use crate::tests::support::stubs::sample_review;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct Recording {
        seen: Mutex<Option<(ReviewFilter, ReviewSort, PageRequest)>>,
    }

    #[async_trait]
    impl ListReviewsUseCase for Recording {
        async fn execute(
            &self,
            filter: ReviewFilter,
            sort: ReviewSort,
            page: PageRequest,
        ) -> Result<PageResult<Review>, ReviewError> {
            *self.seen.lock().unwrap() = Some((filter, sort, page));
            Ok(PageResult::new(vec![], page, 0))
        }
    }

    #[async_trait]
    impl GetReviewUseCase for Recording {
        async fn execute(&self, _: Uuid) -> Result<Review, ReviewError> {
            Err(ReviewError::NotFound)
        }
    }

    #[async_trait]
    impl VendorReviewStatsUseCase for Recording {
        async fn execute(&self, _: Uuid) -> Result<VendorReviewStats, ReviewError> {
            let mut review = sample_review(Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
            review.rating = 4;
            Ok(VendorReviewStats::from_reviews(&[review]))
        }
    }

    async fn call(recording: Arc<Recording>, uri: &str) -> actix_web::dev::ServiceResponse {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ReviewUseCases {
                    list: recording.clone(),
                    get: recording.clone(),
                    vendor_stats: recording,
                    ..ReviewUseCases::unused()
                }))
                .configure(configure),
        )
        .await;

        test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await
    }

    #[actix_web::test]
    async fn list_parses_filters_and_sort() {
        let recording = Arc::new(Recording::default());
        let vendor = Uuid::new_v4();

        let resp = call(
            recording.clone(),
            &format!(
                "/reviews?vendor_id={vendor}&min_rating=4&has_images=true&sort_by=helpful_count&sort_order=asc&limit=5"
            ),
        )
        .await;

        assert_eq!(resp.status(), 200);
        let (filter, sort, page) = recording.seen.lock().unwrap().clone().unwrap();
        assert_eq!(filter.vendor_id, Some(vendor));
        assert_eq!(filter.min_rating, Some(4));
        assert_eq!(filter.has_images, Some(true));
        assert_eq!(sort.field, ReviewSortField::HelpfulCount);
        assert_eq!(sort.order, SortOrder::Asc);
        assert_eq!(page.limit, 5);
    }

    #[actix_web::test]
    async fn stats_route_is_not_shadowed_by_id_route() {
        let resp = call(
            Arc::new(Recording::default()),
            &format!("/reviews/vendor/{}/stats", Uuid::new_v4()),
        )
        .await;

        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["total_reviews"], 1);
        assert_eq!(body["data"]["rating_distribution"]["4"], 1);
        assert_eq!(body["data"]["rating_distribution"]["5"], 0);
    }

    #[actix_web::test]
    async fn missing_review_is_404() {
        let resp = call(
            Arc::new(Recording::default()),
            &format!("/reviews/{}", Uuid::new_v4()),
        )
        .await;

        assert_eq!(resp.status(), 404);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "REVIEW_NOT_FOUND");
    }
}
