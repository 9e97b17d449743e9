use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AttendanceService;
use crate::models::attendance::requests::AttendanceListParams;
use crate::models::attendance::responses::AttendanceListResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_attendance(
    service: &AttendanceService,
    params: AttendanceListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_attendance(params.into()).await {
        Ok(records) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AttendanceListResponse::from(records),
            "Attendance loaded successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to load attendance: {e}"),
            )),
        ),
    }
}
