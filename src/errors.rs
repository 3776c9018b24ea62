//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

use crate::models::common::ValidationErrors;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() / error_type() / message() 方法
/// - 便捷构造函数
macro_rules! define_jcourse_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum JCourseError {
            $($variant(String),)*
        }

        impl JCourseError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(JCourseError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(JCourseError::$variant(_) => $type_name,)*
                }
            }

            pub fn message(&self) -> &str {
                match self {
                    $(JCourseError::$variant(msg) => msg,)*
                }
            }
        }

        paste::paste! {
            impl JCourseError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        JCourseError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_jcourse_errors! {
    Configuration("E001", "Configuration Error"),
    DatabaseOperation("E002", "Database Operation Error"),
    Validation("E003", "Validation Error"),
    NotFound("E004", "Resource Not Found"),
    Serialization("E005", "Serialization Error"),
    DateParse("E006", "Date Parse Error"),
}

impl JCourseError {
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

    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for JCourseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for JCourseError {}

impl From<sea_orm::DbErr> for JCourseError {
    fn from(err: sea_orm::DbErr) -> Self {
        JCourseError::DatabaseOperation(err.to_string())
    }
}

impl From<serde_json::Error> for JCourseError {
    fn from(err: serde_json::Error) -> Self {
        JCourseError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for JCourseError {
    fn from(err: chrono::ParseError) -> Self {
        JCourseError::DateParse(err.to_string())
    }
}

impl From<config::ConfigError> for JCourseError {
    fn from(err: config::ConfigError) -> Self {
        JCourseError::Configuration(err.to_string())
    }
}

impl From<ValidationErrors> for JCourseError {
    fn from(errors: ValidationErrors) -> Self {
        JCourseError::Validation(errors.summary())
    }
}

pub type Result<T> = std::result::Result<T, JCourseError>;
