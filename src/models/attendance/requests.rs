use chrono::NaiveDate;
use serde::Deserialize;
use ts_rs::TS;

use super::entities::AttendanceStatus;
use crate::models::common::paging::{PagingQuery, deserialize_optional_i64};

/// 创建考勤记录请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct CreateAttendanceRequest {
    pub student_id: i64,
    pub date: NaiveDate, // ISO 8601 日期，如 "2026-03-02"
    pub status: AttendanceStatus,
    pub notes: Option<String>,
}

/// 更新考勤记录请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct UpdateAttendanceRequest {
    pub date: Option<NaiveDate>,
    pub status: Option<AttendanceStatus>,
    pub notes: Option<String>,
}

/// 点名请求，按 (student, date) 自然键 update-or-create
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct MarkAttendanceRequest {
    pub student_id: i64,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub notes: Option<String>,
}

/// 考勤列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub paging: PagingQuery,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub student_id: Option<i64>,
    /// 单日筛选（与 start_date/end_date 互斥，同时给出时以 date 为准）
    pub date: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone, Default)]
pub struct AttendanceListQuery {
    pub student_id: Option<i64>,
    pub date: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl From<AttendanceListParams> for AttendanceListQuery {
    fn from(params: AttendanceListParams) -> Self {
        Self {
            student_id: params.student_id,
            date: params.date,
            start_date: params.start_date,
            end_date: params.end_date,
            limit: params.paging.limit,
            offset: params.paging.offset,
        }
    }
}
