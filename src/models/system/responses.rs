use serde::Serialize;
use ts_rs::TS;

/// 系统状态响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/system.ts")]
pub struct SystemStatusResponse {
    pub system_name: String,
    pub version: String,
    pub environment: String,
    pub start_time: chrono::DateTime<chrono::Utc>,
    pub uptime_seconds: i64,
}
