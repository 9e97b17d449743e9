use super::entities::Assignment;
use serde::Serialize;
use ts_rs::TS;

// 作业列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentListResponse {
    pub items: Vec<Assignment>,
    pub total: i64,
}

impl From<Vec<Assignment>> for AssignmentListResponse {
    fn from(items: Vec<Assignment>) -> Self {
        let total = items.len() as i64;
        Self { items, total }
    }
}
