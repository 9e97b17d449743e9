//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_classtrack_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum ClassTrackError {
            $($variant(String),)*
        }

        impl ClassTrackError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(ClassTrackError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(ClassTrackError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(ClassTrackError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl ClassTrackError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        ClassTrackError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_classtrack_errors! {
    TableStoreConfig("E001", "Table Store Configuration Error"),
    TableStoreConnection("E002", "Table Store Connection Error"),
    TableStoreOperation("E003", "Table Store Operation Error"),
    Validation("E004", "Validation Error"),
    NotFound("E005", "Resource Not Found"),
    Serialization("E006", "Serialization Error"),
    DateParse("E007", "Date Parse Error"),
    FileOperation("E008", "File Operation Error"),
}

impl ClassTrackError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for ClassTrackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ClassTrackError {}

// 为常见的错误类型实现 From trait
impl From<reqwest::Error> for ClassTrackError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            ClassTrackError::TableStoreConnection(err.to_string())
        } else {
            ClassTrackError::TableStoreOperation(err.to_string())
        }
    }
}

impl From<std::io::Error> for ClassTrackError {
    fn from(err: std::io::Error) -> Self {
        ClassTrackError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for ClassTrackError {
    fn from(err: serde_json::Error) -> Self {
        ClassTrackError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for ClassTrackError {
    fn from(err: chrono::ParseError) -> Self {
        ClassTrackError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ClassTrackError>;
