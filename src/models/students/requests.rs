use chrono::NaiveDate;
use serde::Deserialize;
use ts_rs::TS;

use super::entities::StudentStatus;
use crate::models::common::paging::PagingQuery;

/// 创建学生请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct CreateStudentRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub grade_level: i32,
    pub enrollment_date: NaiveDate, // ISO 8601 日期，如 "2026-09-01"
    pub status: StudentStatus,
}

/// 更新学生请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct UpdateStudentRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub grade_level: Option<i32>,
    pub enrollment_date: Option<NaiveDate>,
    pub status: Option<StudentStatus>,
}

/// 学生列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub paging: PagingQuery,
    /// 按姓名或邮箱模糊搜索
    pub search: Option<String>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone, Default)]
pub struct StudentListQuery {
    pub search: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl From<StudentListParams> for StudentListQuery {
    fn from(params: StudentListParams) -> Self {
        Self {
            search: params.search,
            limit: params.paging.limit,
            offset: params.paging.offset,
        }
    }
}
