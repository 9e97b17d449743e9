pub mod assignments;

pub mod attendance;

pub mod dashboard;

pub mod grades;

pub mod students;

pub mod system;

pub mod frontend;

pub use assignments::configure_assignments_routes;
pub use attendance::configure_attendance_routes;
pub use dashboard::configure_dashboard_routes;
pub use frontend::configure_frontend_routes;
pub use grades::configure_grades_routes;
pub use students::configure_students_routes;
pub use system::configure_system_routes;
