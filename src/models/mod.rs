pub mod assignments;
pub mod attendance;
pub mod common;
pub mod dashboard;
pub mod grades;
pub mod students;
pub mod system;

pub use common::lookup::RecordRef;
pub use common::paging::PagingQuery;
pub use common::response::ApiResponse;

// 业务错误码（HTTP 响应 code 字段）
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ErrorCode {
    Success = 0,
    BadRequest = 40000,
    NotFound = 40400,
    StudentNotFound = 40401,
    AssignmentNotFound = 40402,
    GradeNotFound = 40403,
    AttendanceRecordNotFound = 40404,
    InternalServerError = 50000,
    TableStoreUnavailable = 50001,
}

// 程序启动时间，注入到 app data 供状态接口使用
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
