use actix_web::{delete, post, put, web, Responder};
use uuid::Uuid;

use super::inquiry_error;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::inquiries::application::domain::{Inquiry, MessageRequest, StatusChange};
use crate::modules::inquiries::application::inquiry_use_cases::InquiryUseCases;
use crate::shared::api::{ApiResponse, MessageBody};

/// Reply to an inquiry
///
/// A pending inquiry becomes `replied`. Closed inquiries keep their status.
#[utoipa::path(
    post,
    path = "/api/v1/inquiries/{id}/messages",
    tag = "inquiries",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Inquiry id")),
    request_body = MessageRequest,
    responses(
        (status = 200, description = "Inquiry with the new message", body = inline(SuccessResponse<Inquiry>)),
        (status = 400, description = "Empty message", body = ErrorResponse),
        (status = 403, description = "Not a party to the inquiry", body = ErrorResponse),
        (status = 404, description = "Inquiry not found", body = ErrorResponse),
    )
)]
#[post("/inquiries/{id}/messages")]
pub async fn add_inquiry_message_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<MessageRequest>,
    inquiries: web::Data<InquiryUseCases>,
) -> impl Responder {
    match inquiries
        .add_message
        .execute(user.actor(), path.into_inner(), req.into_inner())
        .await
    {
        Ok(inquiry) => ApiResponse::success(inquiry),
        Err(e) => inquiry_error(e),
    }
}

/// Mark the other party's messages as read
#[utoipa::path(
    post,
    path = "/api/v1/inquiries/{id}/read",
    tag = "inquiries",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Inquiry id")),
    responses(
        (status = 200, description = "Messages marked as read", body = inline(SuccessResponse<MessageBody>)),
        (status = 403, description = "Not a party to the inquiry", body = ErrorResponse),
        (status = 404, description = "Inquiry not found", body = ErrorResponse),
    )
)]
#[post("/inquiries/{id}/read")]
pub async fn mark_inquiry_read_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    inquiries: web::Data<InquiryUseCases>,
) -> impl Responder {
    match inquiries.mark_read.execute(user.actor(), path.into_inner()).await {
        Ok(()) => ApiResponse::message("Inquiry marked as read"),
        Err(e) => inquiry_error(e),
    }
}

/// Change the status of an inquiry
///
/// Closing records who closed it and when, with an optional reason.
#[utoipa::path(
    put,
    path = "/api/v1/inquiries/{id}/status",
    tag = "inquiries",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Inquiry id")),
    request_body = StatusChange,
    responses(
        (status = 200, description = "Updated inquiry", body = inline(SuccessResponse<Inquiry>)),
        (status = 403, description = "Not a party to the inquiry", body = ErrorResponse),
        (status = 404, description = "Inquiry not found", body = ErrorResponse),
    )
)]
#[put("/inquiries/{id}/status")]
pub async fn update_inquiry_status_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<StatusChange>,
    inquiries: web::Data<InquiryUseCases>,
) -> impl Responder {
    match inquiries
        .update_status
        .execute(user.actor(), path.into_inner(), req.into_inner())
        .await
    {
        Ok(inquiry) => ApiResponse::success(inquiry),
        Err(e) => inquiry_error(e),
    }
}

#[utoipa::path(
    delete,
    path = "/api/v1/inquiries/{id}",
    tag = "inquiries",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Inquiry id")),
    responses(
        (status = 200, description = "Inquiry deleted", body = inline(SuccessResponse<MessageBody>)),
        (status = 403, description = "Not a party to the inquiry", body = ErrorResponse),
        (status = 404, description = "Inquiry not found", body = ErrorResponse),
    )
)]
#[delete("/inquiries/{id}")]
pub async fn delete_inquiry_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    inquiries: web::Data<InquiryUseCases>,
) -> impl Responder {
    match inquiries.delete.execute(user.actor(), path.into_inner()).await {
        Ok(()) => ApiResponse::message("Inquiry deleted successfully"),
        Err(e) => inquiry_error(e),
    }
}
