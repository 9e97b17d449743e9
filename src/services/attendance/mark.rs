use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AttendanceService;
use crate::errors::{ClassTrackError, Result};
use crate::models::attendance::entities::AttendanceRecord;
use crate::models::attendance::requests::{
    AttendanceListQuery, CreateAttendanceRequest, MarkAttendanceRequest, UpdateAttendanceRequest,
};
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

pub async fn mark_attendance(
    service: &AttendanceService,
    mark_data: MarkAttendanceRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match mark_attendance_record(&storage, mark_data).await {
        Ok(record) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            record,
            "Attendance saved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to save attendance: {e}"),
            )),
        ),
    }
}

/// 按 (student, date) 自然键写入：当天已有记录则更新状态与备注，否则创建
///
/// 键唯一性只由本操作维护，存储侧不设约束。
pub(crate) async fn mark_attendance_record(
    storage: &Arc<dyn Storage>,
    req: MarkAttendanceRequest,
) -> Result<AttendanceRecord> {
    let existing = storage
        .list_attendance(AttendanceListQuery {
            student_id: Some(req.student_id),
            date: Some(req.date),
            ..Default::default()
        })
        .await?;

    match existing.first() {
        Some(record) => {
            info!(
                "Updating attendance {} for student {} on {}",
                record.id, req.student_id, req.date
            );
            storage
                .update_attendance(
                    record.id,
                    UpdateAttendanceRequest {
                        date: Some(req.date),
                        status: Some(req.status),
                        notes: req.notes,
                    },
                )
                .await?
                .ok_or_else(|| {
                    ClassTrackError::not_found(format!(
                        "Attendance record {} vanished during mark",
                        record.id
                    ))
                })
        }
        None => {
            storage
                .create_attendance(CreateAttendanceRequest {
                    student_id: req.student_id,
                    date: req.date,
                    status: req.status,
                    notes: req.notes,
                })
                .await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::attendance::entities::AttendanceStatus;
    use crate::storage::testing::MemStorage;
    use chrono::NaiveDate;

    fn mark_req(status: AttendanceStatus) -> MarkAttendanceRequest {
        MarkAttendanceRequest {
            student_id: 3,
            date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
            status,
            notes: None,
        }
    }

    #[tokio::test]
    async fn test_mark_twice_updates_instead_of_duplicating() {
        let storage: Arc<dyn Storage> = Arc::new(MemStorage::new());

        let first = mark_attendance_record(&storage, mark_req(AttendanceStatus::Absent))
            .await
            .unwrap();
        let second = mark_attendance_record(&storage, mark_req(AttendanceStatus::Late))
            .await
            .unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(second.status, AttendanceStatus::Late);

        let all = storage
            .list_attendance(AttendanceListQuery::default())
            .await
            .unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn test_mark_on_other_day_creates_new_record() {
        let storage: Arc<dyn Storage> = Arc::new(MemStorage::new());

        mark_attendance_record(&storage, mark_req(AttendanceStatus::Present))
            .await
            .unwrap();
        mark_attendance_record(
            &storage,
            MarkAttendanceRequest {
                student_id: 3,
                date: NaiveDate::from_ymd_opt(2026, 3, 3).unwrap(),
                status: AttendanceStatus::Present,
                notes: None,
            },
        )
        .await
        .unwrap();

        let all = storage
            .list_attendance(AttendanceListQuery::default())
            .await
            .unwrap();
        assert_eq!(all.len(), 2);
    }
}
