use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::GradeService;
use crate::errors::{ClassTrackError, Result};
use crate::models::grades::entities::Grade;
use crate::models::grades::requests::{
    CreateGradeRequest, GradeListQuery, UpdateGradeRequest, UpsertGradeRequest,
};
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;
use crate::utils::validate::validate_score;

pub async fn upsert_grade(
    service: &GradeService,
    upsert_data: UpsertGradeRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 入参校验
    if let Err(msg) = validate_score(upsert_data.score) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }

    match upsert_grade_record(&storage, upsert_data).await {
        Ok(grade) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(grade, "Grade saved successfully")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to save grade: {e}"),
            )),
        ),
    }
}

/// 按 (student, assignment) 自然键写入：已有记录则更新，否则创建
///
/// 更新路径会把提交日期刷新为当天。键唯一性只由本操作维护，存储侧不设约束。
pub(crate) async fn upsert_grade_record(
    storage: &Arc<dyn Storage>,
    req: UpsertGradeRequest,
) -> Result<Grade> {
    let existing = storage
        .list_grades(GradeListQuery {
            student_id: Some(req.student_id),
            assignment_id: Some(req.assignment_id),
            ..Default::default()
        })
        .await?;

    match existing.first() {
        Some(grade) => {
            info!(
                "Updating existing grade {} for student {} on assignment {}",
                grade.id, req.student_id, req.assignment_id
            );
            storage
                .update_grade(
                    grade.id,
                    UpdateGradeRequest {
                        score: Some(req.score),
                        submitted_date: Some(chrono::Local::now().date_naive()),
                        comments: req.comments,
                    },
                )
                .await?
                .ok_or_else(|| {
                    ClassTrackError::not_found(format!("Grade {} vanished during upsert", grade.id))
                })
        }
        None => {
            storage
                .create_grade(CreateGradeRequest {
                    student_id: req.student_id,
                    assignment_id: req.assignment_id,
                    score: req.score,
                    submitted_date: None,
                    comments: req.comments,
                })
                .await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::testing::MemStorage;

    fn upsert_req(score: f64) -> UpsertGradeRequest {
        UpsertGradeRequest {
            student_id: 3,
            assignment_id: 7,
            score,
            comments: None,
        }
    }

    #[tokio::test]
    async fn test_upsert_twice_updates_instead_of_duplicating() {
        let storage: Arc<dyn Storage> = Arc::new(MemStorage::new());

        let first = upsert_grade_record(&storage, upsert_req(82.0)).await.unwrap();
        let second = upsert_grade_record(&storage, upsert_req(91.0)).await.unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(second.score, 91.0);

        let all = storage.list_grades(GradeListQuery::default()).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].score, 91.0);
    }

    #[tokio::test]
    async fn test_upsert_different_assignments_creates_separate_grades() {
        let storage: Arc<dyn Storage> = Arc::new(MemStorage::new());

        upsert_grade_record(&storage, upsert_req(82.0)).await.unwrap();
        upsert_grade_record(
            &storage,
            UpsertGradeRequest {
                student_id: 3,
                assignment_id: 8,
                score: 75.0,
                comments: None,
            },
        )
        .await
        .unwrap();

        let all = storage.list_grades(GradeListQuery::default()).await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn test_upsert_keeps_comments() {
        let storage: Arc<dyn Storage> = Arc::new(MemStorage::new());

        let grade = upsert_grade_record(
            &storage,
            UpsertGradeRequest {
                student_id: 3,
                assignment_id: 7,
                score: 88.0,
                comments: Some("Solid work".to_string()),
            },
        )
        .await
        .unwrap();

        assert_eq!(grade.comments.as_deref(), Some("Solid work"));
    }
}
