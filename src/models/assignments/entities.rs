use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct Assignment {
    // 唯一 ID
    pub id: i64,
    // 作业标题
    pub title: String,
    // 作业分类（homework / quiz / exam / project 等，由使用方约定）
    pub category: Option<String>,
    // 满分分值
    pub total_points: i32,
    // 截止日期
    pub due_date: chrono::NaiveDate,
    // 作业描述
    pub description: Option<String>,
}
