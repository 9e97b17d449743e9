use std::collections::HashMap;
use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::NaiveDate;
use tracing::error;

use super::DashboardService;
use crate::errors::Result;
use crate::models::assignments::requests::AssignmentListQuery;
use crate::models::attendance::requests::AttendanceListQuery;
use crate::models::dashboard::responses::{
    AttendanceAlertEntry, DashboardResponse, DashboardStats, RecentGradeEntry,
};
use crate::models::grades::requests::GradeListQuery;
use crate::models::students::requests::StudentListQuery;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;
use crate::utils::attendance_stats::{attendance_alerts, today_attendance_stats};
use crate::utils::grade_stats::{class_grade_average, recent_grades};

// 最近动态条数
const RECENT_ACTIVITY_LIMIT: usize = 5;

pub async fn get_dashboard(
    service: &DashboardService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let today = chrono::Local::now().date_naive();

    match load_dashboard(&storage, today).await {
        Ok(dashboard) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            dashboard,
            "Dashboard loaded successfully",
        ))),
        Err(e) => {
            error!("Dashboard data loading error: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::TableStoreUnavailable,
                    "Failed to load dashboard data. Please try again.",
                )),
            )
        }
    }
}

/// 加载仪表盘数据
///
/// 四个集合并发拉取，join-all 语义：任一失败则整体失败，交由调用方提示重试。
/// 统计全部在本地重新计算，不做缓存。
pub(crate) async fn load_dashboard(
    storage: &Arc<dyn Storage>,
    today: NaiveDate,
) -> Result<DashboardResponse> {
    let (students, grades, attendance, assignments) = tokio::try_join!(
        storage.list_students(StudentListQuery::default()),
        storage.list_grades(GradeListQuery::default()),
        storage.list_attendance(AttendanceListQuery::default()),
        storage.list_assignments(AssignmentListQuery::default()),
    )?;

    let stats = DashboardStats {
        total_students: students.len() as i64,
        active_students: students.iter().filter(|s| s.is_active()).count() as i64,
        total_assignments: assignments.len() as i64,
        class_average: class_grade_average(&grades),
        today_attendance: today_attendance_stats(&students, &attendance, today),
    };

    // 引用解析表：解析不到的外键显示占位名
    let student_names: HashMap<i64, String> = students
        .iter()
        .map(|s| (s.id, s.full_name()))
        .collect();
    let assignment_titles: HashMap<i64, &str> = assignments
        .iter()
        .map(|a| (a.id, a.title.as_str()))
        .collect();

    let recent_grades = recent_grades(&grades, RECENT_ACTIVITY_LIMIT)
        .into_iter()
        .map(|g| RecentGradeEntry {
            grade_id: g.id,
            student_name: student_names
                .get(&g.student_id)
                .cloned()
                .unwrap_or_else(|| "Unknown".to_string()),
            assignment_title: assignment_titles
                .get(&g.assignment_id)
                .map(|t| t.to_string())
                .unwrap_or_else(|| "Unknown Assignment".to_string()),
            score: g.score,
            submitted_date: g.submitted_date,
        })
        .collect();

    let attendance_alerts = attendance_alerts(&attendance, RECENT_ACTIVITY_LIMIT)
        .into_iter()
        .map(|r| AttendanceAlertEntry {
            record_id: r.id,
            student_name: student_names
                .get(&r.student_id)
                .cloned()
                .unwrap_or_else(|| "Unknown".to_string()),
            date: r.date,
            status: r.status,
        })
        .collect();

    Ok(DashboardResponse {
        stats,
        recent_grades,
        attendance_alerts,
    })
}
