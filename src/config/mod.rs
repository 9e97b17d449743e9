pub mod r#impl;
pub mod structs;

pub use structs::AppConfig;
