use actix_web::{get, web, Responder};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use super::inquiry_error;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::inquiries::application::domain::{Inquiry, InquiryListQuery, UnreadCount};
use crate::modules::inquiries::application::inquiry_use_cases::InquiryUseCases;
use crate::shared::api::ApiResponse;
use crate::shared::pagination::{PageRequest, PageResult};

/// List the caller's inquiries
///
/// Customers see inquiries they sent, vendors those addressed to their
/// business and admins everything. Most recent activity first by default.
#[utoipa::path(
    get,
    path = "/api/v1/inquiries",
    tag = "inquiries",
    security(("bearer_auth" = [])),
    params(InquiryListQuery),
    responses(
        (status = 200, description = "Page of inquiries", body = inline(SuccessResponse<PageResult<Inquiry>>)),
        (status = 404, description = "Vendor profile missing", body = ErrorResponse),
    )
)]
#[get("/inquiries")]
pub async fn list_inquiries_handler(
    user: AuthenticatedUser,
    query: web::Query<InquiryListQuery>,
    inquiries: web::Data<InquiryUseCases>,
) -> impl Responder {
    let page = PageRequest::new(query.page, query.limit);

    match inquiries
        .list
        .execute(user.actor(), query.filter(), query.sort(), page)
        .await
    {
        Ok(result) => ApiResponse::success(result),
        Err(e) => inquiry_error(e),
    }
}

/// Inquiries with unread messages
#[utoipa::path(
    get,
    path = "/api/v1/inquiries/unread-count",
    tag = "inquiries",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Number of inquiries waiting for the caller", body = inline(SuccessResponse<UnreadCount>)),
    )
)]
#[get("/inquiries/unread-count")]
pub async fn unread_count_handler(
    user: AuthenticatedUser,
    inquiries: web::Data<InquiryUseCases>,
) -> impl Responder {
    match inquiries.unread_count.execute(user.actor()).await {
        Ok(count) => ApiResponse::success(UnreadCount { count }),
        Err(e) => inquiry_error(e),
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RecentQuery {
    /// Defaults to 5.
    pub limit: Option<u64>,
}

#[utoipa::path(
    get,
    path = "/api/v1/inquiries/recent",
    tag = "inquiries",
    security(("bearer_auth" = [])),
    params(RecentQuery),
    responses(
        (status = 200, description = "Latest activity first", body = inline(SuccessResponse<Vec<Inquiry>>)),
    )
)]
#[get("/inquiries/recent")]
pub async fn recent_inquiries_handler(
    user: AuthenticatedUser,
    query: web::Query<RecentQuery>,
    inquiries: web::Data<InquiryUseCases>,
) -> impl Responder {
    match inquiries
        .recent
        .execute(user.actor(), query.limit.unwrap_or(5))
        .await
    {
        Ok(list) => ApiResponse::success(list),
        Err(e) => inquiry_error(e),
    }
}

/// Get an inquiry with its thread
#[utoipa::path(
    get,
    path = "/api/v1/inquiries/{id}",
    tag = "inquiries",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Inquiry id")),
    responses(
        (status = 200, description = "Inquiry", body = inline(SuccessResponse<Inquiry>)),
        (status = 403, description = "Not a party to the inquiry", body = ErrorResponse),
        (status = 404, description = "Inquiry not found", body = ErrorResponse),
    )
)]
#[get("/inquiries/{id}")]
pub async fn get_inquiry_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    inquiries: web::Data<InquiryUseCases>,
) -> impl Responder {
    match inquiries.get.execute(user.actor(), path.into_inner()).await {
        Ok(inquiry) => ApiResponse::success(inquiry),
        Err(e) => inquiry_error(e),
    }
}
