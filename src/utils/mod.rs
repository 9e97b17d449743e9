pub mod attendance_stats;
pub mod extractor;
pub mod grade_stats;
pub mod parameter_error_handler;
pub mod validate;

pub use extractor::SafeIDI64;
pub use parameter_error_handler::json_error_handler;
pub use parameter_error_handler::query_error_handler;
