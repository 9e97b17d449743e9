use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::GradeService;
use crate::models::grades::requests::CreateGradeRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_score;

pub async fn create_grade(
    service: &GradeService,
    grade_data: CreateGradeRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 入参校验
    if let Err(msg) = validate_score(grade_data.score) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }

    match storage.create_grade(grade_data).await {
        Ok(grade) => {
            info!(
                "Grade recorded for student {} on assignment {}",
                grade.student_id, grade.assignment_id
            );
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(grade, "Grade created successfully")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to create grade: {e}"),
            )),
        ),
    }
}
