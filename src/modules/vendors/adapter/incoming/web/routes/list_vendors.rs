use actix_web::{get, web, Responder};
use serde::Deserialize;
use utoipa::IntoParams;

use super::vendor_error;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::vendors::application::domain::{Vendor, VendorListQuery};
use crate::modules::vendors::application::vendor_use_cases::VendorUseCases;
use crate::shared::api::ApiResponse;
use crate::shared::pagination::{PageRequest, PageResult};

/// Browse vendors
#[utoipa::path(
    get,
    path = "/api/v1/vendors",
    tag = "vendors",
    params(VendorListQuery),
    responses(
        (status = 200, description = "Page of vendors", body = inline(SuccessResponse<PageResult<Vendor>>)),
        (status = 400, description = "Invalid filter", body = ErrorResponse),
    )
)]
#[get("/vendors")]
pub async fn list_vendors_handler(
    query: web::Query<VendorListQuery>,
    vendors: web::Data<VendorUseCases>,
) -> impl Responder {
    let page = PageRequest::new(query.page, query.limit);

    match vendors
        .list
        .execute(query.filter(), query.sort(), page)
        .await
    {
        Ok(result) => ApiResponse::success(result),
        Err(e) => vendor_error(e),
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FeaturedQuery {
    /// Defaults to 10, at most 50.
    pub limit: Option<u64>,
}

/// Featured vendors
#[utoipa::path(
    get,
    path = "/api/v1/vendors/featured",
    tag = "vendors",
    params(FeaturedQuery),
    responses(
        (status = 200, description = "Featured vendors", body = inline(SuccessResponse<Vec<Vendor>>)),
    )
)]
#[get("/vendors/featured")]
pub async fn featured_vendors_handler(
    query: web::Query<FeaturedQuery>,
    vendors: web::Data<VendorUseCases>,
) -> impl Responder {
    match vendors.featured.execute(query.limit.unwrap_or(10)).await {
        Ok(list) => ApiResponse::success(list),
        Err(e) => vendor_error(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::vendors::application::domain::{
        VendorCategory, VendorFilter, VendorSort, VendorSortField,
    };
    use crate::modules::vendors::application::ports::incoming::use_cases::{
        FeaturedVendorsUseCase, ListVendorsUseCase, VendorError,
    };
    use crate::shared::pagination::SortOrder;
    use crate::tests::support::stubs::sample_vendor;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};
    use uuid::Uuid;

    #[derive(Default)]
    struct CapturingList {
        seen: Mutex<Option<(VendorFilter, VendorSort, PageRequest)>>,
    }

    #[async_trait]
    impl ListVendorsUseCase for CapturingList {
        async fn execute(
            &self,
            filter: VendorFilter,
            sort: VendorSort,
            page: PageRequest,
        ) -> Result<PageResult<Vendor>, VendorError> {
            *self.seen.lock().unwrap() = Some((filter, sort, page));
            Ok(PageResult::new(
                vec![sample_vendor(Uuid::new_v4(), Uuid::new_v4())],
                page,
                1,
            ))
        }
    }

    struct MockFeatured;

    #[async_trait]
    impl FeaturedVendorsUseCase for MockFeatured {
        async fn execute(&self, limit: u64) -> Result<Vec<Vendor>, VendorError> {
            Ok((0..limit)
                .map(|_| sample_vendor(Uuid::new_v4(), Uuid::new_v4()))
                .collect())
        }
    }

    #[actix_web::test]
    async fn list_parses_filters_and_paging() {
        let list = Arc::new(CapturingList::default());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(VendorUseCases {
                    list: list.clone(),
                    ..VendorUseCases::unused()
                }))
                .service(list_vendors_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/vendors?category=cakes&district=Kandy&sort_by=rating&sort_order=asc&page=2&limit=5")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["page"], 2);
        assert_eq!(body["data"]["items"].as_array().unwrap().len(), 1);

        let (filter, sort, page) = list.seen.lock().unwrap().clone().unwrap();
        assert_eq!(filter.category, Some(VendorCategory::Cakes));
        assert_eq!(filter.district.as_deref(), Some("Kandy"));
        assert_eq!(sort.field, VendorSortField::Rating);
        assert_eq!(sort.order, SortOrder::Asc);
        assert_eq!(page.limit, 5);
    }

    #[actix_web::test]
    async fn list_rejects_unknown_category() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(VendorUseCases::unused()))
                .service(list_vendors_handler),
        )
        .await;

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/vendors?category=spaceships")
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn featured_defaults_to_ten() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(VendorUseCases {
                    featured: Arc::new(MockFeatured),
                    ..VendorUseCases::unused()
                }))
                .service(featured_vendors_handler),
        )
        .await;

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/vendors/featured").to_request(),
        )
        .await;

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 10);
    }
}
