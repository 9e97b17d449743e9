pub mod assignments;
pub mod attendance;
pub mod dashboard;
pub mod grades;
pub mod students;
pub mod system;

pub use assignments::AssignmentService;
pub use attendance::AttendanceService;
pub use dashboard::DashboardService;
pub use grades::GradeService;
pub use students::StudentService;
pub use system::SystemService;
