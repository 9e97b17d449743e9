use super::entities::Grade;
use serde::Serialize;
use ts_rs::TS;

// 成绩列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct GradeListResponse {
    pub items: Vec<Grade>,
    pub total: i64,
}

impl From<Vec<Grade>> for GradeListResponse {
    fn from(items: Vec<Grade>) -> Self {
        let total = items.len() as i64;
        Self { items, total }
    }
}
