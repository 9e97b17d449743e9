use super::entities::Student;
use serde::Serialize;
use ts_rs::TS;

// 学生列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentListResponse {
    pub items: Vec<Student>,
    pub total: i64,
}

impl From<Vec<Student>> for StudentListResponse {
    fn from(items: Vec<Student>) -> Self {
        let total = items.len() as i64;
        Self { items, total }
    }
}
