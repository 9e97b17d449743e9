use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::models::assignments::requests::AssignmentListParams;
use crate::models::assignments::responses::AssignmentListResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_assignments(
    service: &AssignmentService,
    params: AssignmentListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_assignments(params.into()).await {
        Ok(assignments) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AssignmentListResponse::from(assignments),
            "Assignments loaded successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to load assignments: {e}"),
            )),
        ),
    }
}
