use chrono::NaiveDate;
use serde::Serialize;
use ts_rs::TS;

use crate::models::attendance::entities::AttendanceStatus;

/// 仪表盘响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct DashboardResponse {
    pub stats: DashboardStats,
    pub recent_grades: Vec<RecentGradeEntry>,
    pub attendance_alerts: Vec<AttendanceAlertEntry>,
}

/// 汇总统计
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct DashboardStats {
    pub total_students: i64,
    pub active_students: i64,
    pub total_assignments: i64,
    /// 全班平均分（0-100，保留一位小数）
    pub class_average: f64,
    pub today_attendance: TodayAttendanceStats,
}

/// 今日考勤统计
///
/// total 为名册人数而非记录条数，当天没有记录的学生按缺勤计入分母。
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct TodayAttendanceStats {
    pub present: i64,
    pub total: i64,
    /// 0-100，保留一位小数
    pub percentage: f64,
}

/// 最近成绩条目
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct RecentGradeEntry {
    pub grade_id: i64,
    pub student_name: String,
    pub assignment_title: String,
    pub score: f64,
    pub submitted_date: NaiveDate,
}

/// 考勤异常条目（非出勤记录）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct AttendanceAlertEntry {
    pub record_id: i64,
    pub student_name: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}
