use actix_web::{post, web, Responder};

use super::inquiry_error;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::inquiries::application::domain::{Inquiry, InquiryRequest};
use crate::modules::inquiries::application::inquiry_use_cases::InquiryUseCases;
use crate::shared::api::ApiResponse;

/// Send an inquiry to a vendor
///
/// The message becomes the first entry of the conversation thread.
#[utoipa::path(
    post,
    path = "/api/v1/inquiries",
    tag = "inquiries",
    security(("bearer_auth" = [])),
    request_body = InquiryRequest,
    responses(
        (status = 201, description = "Inquiry created", body = inline(SuccessResponse<Inquiry>)),
        (status = 400, description = "Missing subject or message", body = ErrorResponse),
        (status = 404, description = "Vendor not found", body = ErrorResponse),
    )
)]
#[post("/inquiries")]
pub async fn create_inquiry_handler(
    user: AuthenticatedUser,
    req: web::Json<InquiryRequest>,
    inquiries: web::Data<InquiryUseCases>,
) -> impl Responder {
    match inquiries.create.execute(user.actor(), req.into_inner()).await {
        Ok(inquiry) => ApiResponse::created(inquiry),
        Err(e) => inquiry_error(e),
    }
}
