use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GradeService;
use crate::models::grades::requests::GradeListParams;
use crate::models::grades::responses::GradeListResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_grades(
    service: &GradeService,
    params: GradeListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_grades(params.into()).await {
        Ok(grades) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            GradeListResponse::from(grades),
            "Grades loaded successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to load grades: {e}"),
            )),
        ),
    }
}
