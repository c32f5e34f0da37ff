use serde::Serialize;
use utoipa::ToSchema;

/// Envelope returned by every successful marketplace endpoint.
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

/// Envelope returned by every failing endpoint, including extractor and
/// body-parsing failures.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

/// `code` is stable and machine-readable: `VALIDATION_ERROR`, `FORBIDDEN`,
/// `INVALID_TOKEN`, `*_NOT_FOUND`, `*_ALREADY_EXISTS`, `INTERNAL_ERROR`, plus
/// module-specific codes such as `BOOKING_NOT_COMPLETED`.
#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    #[schema(example = "VENDOR_NOT_FOUND")]
    pub code: String,

    #[schema(example = "Vendor not found")]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::ApiResponse;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn documented_error_shape_matches_runtime_envelope() {
        let documented = serde_json::to_value(ErrorResponse {
            success: false,
            error: ErrorDetail {
                code: "VENDOR_NOT_FOUND".into(),
                message: "Vendor not found".into(),
            },
        })
        .unwrap();

        let resp = ApiResponse::not_found("VENDOR_NOT_FOUND", "Vendor not found");
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        let runtime: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(documented, runtime);
    }

    #[actix_web::test]
    async fn documented_success_shape_matches_runtime_envelope() {
        let data = serde_json::json!({ "total_reviews": 3, "average_rating": 4.3 });
        let documented = serde_json::to_value(SuccessResponse {
            success: true,
            data: data.clone(),
        })
        .unwrap();

        let bytes = to_bytes(ApiResponse::success(data).into_body()).await.unwrap();
        let runtime: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(documented, runtime);
    }
}
