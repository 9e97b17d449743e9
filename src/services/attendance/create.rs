use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AttendanceService;
use crate::models::attendance::requests::CreateAttendanceRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_attendance(
    service: &AttendanceService,
    record_data: CreateAttendanceRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.create_attendance(record_data).await {
        Ok(record) => {
            info!(
                "Attendance recorded for student {} on {}",
                record.student_id, record.date
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                record,
                "Attendance record created successfully",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to create attendance record: {e}"),
            )),
        ),
    }
}
