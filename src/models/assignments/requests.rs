use chrono::NaiveDate;
use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::paging::PagingQuery;

/// 创建作业请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct CreateAssignmentRequest {
    pub title: String,
    pub category: Option<String>,
    pub total_points: i32,
    pub due_date: NaiveDate, // ISO 8601 日期，如 "2026-10-15"
    pub description: Option<String>,
}

/// 更新作业请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct UpdateAssignmentRequest {
    pub title: Option<String>,
    pub category: Option<String>,
    pub total_points: Option<i32>,
    pub due_date: Option<NaiveDate>,
    pub description: Option<String>,
}

/// 作业列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub paging: PagingQuery,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone, Default)]
pub struct AssignmentListQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl From<AssignmentListParams> for AssignmentListQuery {
    fn from(params: AssignmentListParams) -> Self {
        Self {
            limit: params.paging.limit,
            offset: params.paging.offset,
        }
    }
}
