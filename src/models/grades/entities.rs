use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct Grade {
    // 唯一 ID
    pub id: i64,
    // 得分（0-100）
    pub score: f64,
    // 提交日期
    pub submitted_date: chrono::NaiveDate,
    // 教师评语
    pub comments: Option<String>,
    // 关联学生 ID（lookup 字段已在存储层归一化）
    pub student_id: i64,
    // 关联作业 ID
    pub assignment_id: i64,
}
