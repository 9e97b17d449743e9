use chrono::NaiveDate;
use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::paging::{PagingQuery, deserialize_optional_i64};

/// 创建成绩请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct CreateGradeRequest {
    pub student_id: i64,
    pub assignment_id: i64,
    pub score: f64,
    /// 缺省时取当天
    pub submitted_date: Option<NaiveDate>,
    pub comments: Option<String>,
}

/// 更新成绩请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct UpdateGradeRequest {
    pub score: Option<f64>,
    pub submitted_date: Option<NaiveDate>,
    pub comments: Option<String>,
}

/// 成绩 upsert 请求，按 (student, assignment) 自然键去重
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct UpsertGradeRequest {
    pub student_id: i64,
    pub assignment_id: i64,
    pub score: f64,
    pub comments: Option<String>,
}

/// 成绩列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct GradeListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub paging: PagingQuery,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub student_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub assignment_id: Option<i64>,
    /// 提交日期下界（含）
    pub start_date: Option<NaiveDate>,
    /// 提交日期上界（含）
    pub end_date: Option<NaiveDate>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone, Default)]
pub struct GradeListQuery {
    pub student_id: Option<i64>,
    pub assignment_id: Option<i64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl From<GradeListParams> for GradeListQuery {
    fn from(params: GradeListParams) -> Self {
        Self {
            student_id: params.student_id,
            assignment_id: params.assignment_id,
            start_date: params.start_date,
            end_date: params.end_date,
            limit: params.paging.limit,
            offset: params.paging.offset,
        }
    }
}
