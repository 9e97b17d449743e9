use super::entities::AttendanceRecord;
use serde::Serialize;
use ts_rs::TS;

// 考勤列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceListResponse {
    pub items: Vec<AttendanceRecord>,
    pub total: i64,
}

impl From<Vec<AttendanceRecord>> for AttendanceListResponse {
    fn from(items: Vec<AttendanceRecord>) -> Self {
        let total = items.len() as i64;
        Self { items, total }
    }
}
