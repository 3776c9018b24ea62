//! 写入载荷读取器
//!
//! 从外部 JSON 对象中逐字段取值并收集校验错误。只读字段在读取前被剔除，
//! 因此无论载荷内容如何都无法通过写入路径设置它们。

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use tracing::debug;

use super::ValidationErrors;
use crate::utils::validate::{
    EXPECTED_OBJECT, INTEGER_OUT_OF_RANGE, INVALID_BOOLEAN, INVALID_DATETIME, INVALID_INTEGER,
    INVALID_STRING, NOT_NULL, REQUIRED, validate_max_length, validate_not_blank, validate_url,
};

/// 可由外部载荷构造的写入请求
pub trait FromPayload: Sized {
    /// 客户端可以发送但永远不能控制的字段
    const READ_ONLY_FIELDS: &'static [&'static str];

    /// 读取各字段；出错的字段返回默认值，错误记录在 reader 中
    fn read_fields(reader: &mut PayloadReader) -> Self;

    fn from_payload(payload: &Value) -> Result<Self, ValidationErrors> {
        let mut reader = PayloadReader::new(payload, Self::READ_ONLY_FIELDS)?;
        let value = Self::read_fields(&mut reader);
        reader.finish(value)
    }
}

/// 让 serde 反序列化也走 `FromPayload` 校验，配合 `#[serde(try_from = "serde_json::Value")]`
macro_rules! impl_try_from_payload {
    ($request:ty) => {
        impl TryFrom<serde_json::Value> for $request {
            type Error = $crate::models::common::ValidationErrors;

            fn try_from(payload: serde_json::Value) -> Result<Self, Self::Error> {
                <Self as $crate::models::common::FromPayload>::from_payload(&payload)
            }
        }
    };
}

pub(crate) use impl_try_from_payload;

#[derive(Debug)]
pub struct PayloadReader {
    fields: Map<String, Value>,
    errors: ValidationErrors,
}

impl PayloadReader {
    pub fn new(payload: &Value, read_only: &[&str]) -> Result<Self, ValidationErrors> {
        let Value::Object(map) = payload else {
            return Err(ValidationErrors::non_field(EXPECTED_OBJECT));
        };

        let fields = map
            .iter()
            .filter(|(key, _)| {
                let ignored = read_only.contains(&key.as_str());
                if ignored {
                    debug!(field = %key, "Ignoring read-only field in write payload");
                }
                !ignored
            })
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        Ok(Self {
            fields,
            errors: ValidationErrors::default(),
        })
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// 记录一个额外的字段错误（用于跨字段校验）
    pub fn reject(&mut self, field: &str, message: impl Into<String>) {
        self.errors.add(field, message);
    }

    pub fn finish<T>(self, value: T) -> Result<T, ValidationErrors> {
        if self.errors.is_empty() {
            Ok(value)
        } else {
            debug!(errors = %self.errors, "Write payload rejected");
            Err(self.errors)
        }
    }

    /// 非空字符串，首尾空白会被去除
    pub fn required_text(&mut self, name: &str, max_length: Option<usize>) -> String {
        match self.fields.get(name) {
            None => {
                self.errors.add(name, REQUIRED);
                String::new()
            }
            Some(Value::Null) => {
                self.errors.add(name, NOT_NULL);
                String::new()
            }
            Some(value) => match coerce_string(value) {
                Some(text) => {
                    if let Err(msg) = validate_not_blank(&text) {
                        self.errors.add(name, msg);
                    } else if let Some(Err(msg)) =
                        max_length.map(|max| validate_max_length(&text, max))
                    {
                        self.errors.add(name, msg);
                    }
                    text
                }
                None => {
                    self.errors.add(name, INVALID_STRING);
                    String::new()
                }
            },
        }
    }

    /// 可选字符串；缺失、null 与空白都视为 `None`
    pub fn optional_text(&mut self, name: &str, max_length: Option<usize>) -> Option<String> {
        let value = self.fields.get(name)?;
        if value.is_null() {
            return None;
        }
        let Some(text) = coerce_string(value) else {
            self.errors.add(name, INVALID_STRING);
            return None;
        };
        if text.is_empty() {
            return None;
        }
        if let Some(Err(msg)) = max_length.map(|max| validate_max_length(&text, max)) {
            self.errors.add(name, msg);
        }
        Some(text)
    }

    pub fn optional_url(&mut self, name: &str) -> Option<String> {
        let url = self.optional_text(name, None)?;
        if let Err(msg) = validate_url(&url) {
            self.errors.add(name, msg);
        }
        Some(url)
    }

    pub fn boolean(&mut self, name: &str, default: bool) -> bool {
        let Some(value) = self.fields.get(name) else {
            return default;
        };
        match value {
            Value::Bool(b) => *b,
            Value::Number(n) if n.as_i64() == Some(1) => true,
            Value::Number(n) if n.as_i64() == Some(0) => false,
            Value::String(s) if matches!(s.as_str(), "true" | "True" | "1") => true,
            Value::String(s) if matches!(s.as_str(), "false" | "False" | "0") => false,
            Value::Null => {
                self.errors.add(name, NOT_NULL);
                default
            }
            _ => {
                self.errors.add(name, INVALID_BOOLEAN);
                default
            }
        }
    }

    pub fn required_integer<T>(&mut self, name: &str) -> T
    where
        T: TryFrom<i64> + Default,
    {
        match self.fields.get(name).map(Value::is_null) {
            None => {
                self.errors.add(name, REQUIRED);
                T::default()
            }
            Some(true) => {
                self.errors.add(name, NOT_NULL);
                T::default()
            }
            Some(false) => self.optional_integer(name).unwrap_or_default(),
        }
    }

    /// 接受 JSON 数字或数字字符串
    pub fn optional_integer<T>(&mut self, name: &str) -> Option<T>
    where
        T: TryFrom<i64>,
    {
        let value = self.fields.get(name)?;
        let parsed = match value {
            Value::Null => return None,
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        };
        let Some(raw) = parsed else {
            self.errors.add(name, INVALID_INTEGER);
            return None;
        };
        match T::try_from(raw) {
            Ok(v) => Some(v),
            Err(_) => {
                self.errors.add(name, INTEGER_OUT_OF_RANGE);
                None
            }
        }
    }

    /// RFC 3339 时间字符串
    pub fn optional_datetime(&mut self, name: &str) -> Option<DateTime<Utc>> {
        let value = self.fields.get(name)?;
        match value {
            Value::Null => None,
            Value::String(s) => match DateTime::parse_from_rfc3339(s.trim()) {
                Ok(dt) => Some(dt.with_timezone(&Utc)),
                Err(_) => {
                    self.errors.add(name, INVALID_DATETIME);
                    None
                }
            },
            _ => {
                self.errors.add(name, INVALID_DATETIME);
                None
            }
        }
    }
}

fn coerce_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
